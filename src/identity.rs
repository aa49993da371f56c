//! Realistic-value provider: names, emails, cities, descriptive words.
//!
//! Thin wrapper over the `fake` crate driven by the pipeline's seeded RNG, so
//! identity values replay exactly like every other sampling decision. The one
//! piece of real logic is email uniqueness, which is enforced here with a
//! bounded retry.

use std::collections::HashSet;

use fake::faker::address::en::{CityName, StateAbbr};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

use crate::errors::{DataGenError, DataGenResult};

const UNIQUE_EMAIL_ATTEMPTS: u32 = 100;

/// Generates realistic field values, remembering emails it has handed out.
#[derive(Debug, Default)]
pub struct IdentityProvider {
    issued_emails: HashSet<String>,
}

impl IdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }

    /// An email never returned by this provider before. Fails with
    /// [`DataGenError::Provider`] once the retries are exhausted; there is
    /// no alternate-value policy, so the caller aborts the run.
    pub fn unique_email<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DataGenResult<String> {
        for _ in 0..UNIQUE_EMAIL_ATTEMPTS {
            let candidate: String = SafeEmail().fake_with_rng(rng);
            if self.issued_emails.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(DataGenError::Provider(format!(
            "could not produce a unique email after {} attempts ({} already issued)",
            UNIQUE_EMAIL_ATTEMPTS,
            self.issued_emails.len()
        )))
    }

    pub fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CityName().fake_with_rng(rng)
    }

    pub fn state_code<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        StateAbbr().fake_with_rng(rng)
    }

    /// A capitalized descriptive word for product names.
    pub fn product_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let word: String = Word().fake_with_rng(rng);
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => word,
        }
    }
}
