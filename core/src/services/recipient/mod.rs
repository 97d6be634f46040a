//! Recipient resolution: user id to addressable staff or client account.

mod resolver;

pub use resolver::RecipientResolver;

#[cfg(test)]
mod tests;
