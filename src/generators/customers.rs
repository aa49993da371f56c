use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::catalog::{Category, Gender};
use crate::errors::DataGenResult;
use crate::identity::IdentityProvider;
use crate::models::Customer;
use crate::sampling::{choose_distinct, datetime_in_window, uniform_choice, weighted_choice};

const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
const GENDER_WEIGHTS: [f64; 3] = [0.48, 0.48, 0.04];

/// How many favorite categories a customer gets; size picked uniformly.
const FAVORITE_SET_SIZES: [usize; 2] = [2, 3];

/// Generate the customer population: `count` records with sequential ids from
/// 1, each tagged with 2 or 3 distinct favorite categories.
///
/// Registrations are spread over twice the lookback window ending at
/// `reference_time`. Provider failures (unique-email exhaustion) propagate.
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    provider: &mut IdentityProvider,
    count: u32,
    reference_time: DateTime<Utc>,
    lookback_window_days: u32,
) -> DataGenResult<Vec<Customer>> {
    let registration_days = lookback_window_days * 2;
    let registration_start = reference_time - Duration::days(registration_days as i64);
    debug!(count, registration_days, "generating customers");

    let categories = Category::all();
    let mut customers = Vec::with_capacity(count as usize);

    for id in 1..=count {
        let name = provider.full_name(rng);
        let email = provider.unique_email(rng)?;
        let gender = *weighted_choice(rng, &GENDERS, &GENDER_WEIGHTS);
        let age = rng.gen_range(18..65u8);
        let city = provider.city(rng);
        let state = provider.state_code(rng);
        let registration_date = datetime_in_window(rng, registration_start, registration_days);

        let set_size = *uniform_choice(rng, &FAVORITE_SET_SIZES);
        let favorite_categories = choose_distinct(rng, &categories, set_size);

        customers.push(Customer {
            id,
            name,
            email,
            gender,
            age,
            city,
            state,
            registration_date,
            favorite_categories,
        });
    }

    Ok(customers)
}
