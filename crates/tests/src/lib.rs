#[cfg(test)]
mod common;

#[cfg(test)]
mod token_tests;

#[cfg(test)]
mod identity_tests;

#[cfg(test)]
mod users_tests;

#[cfg(test)]
mod cookie_relay_tests;

#[cfg(test)]
mod health_tests;
