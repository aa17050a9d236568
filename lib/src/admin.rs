use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::RentalError, OWNER_KEY};

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, OWNER_KEY))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, OWNER_KEY), owner);
}

pub fn get_owner(env: &Env) -> Result<Address, RentalError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, OWNER_KEY))
        .ok_or(RentalError::NotInitialized)
}

pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), RentalError> {
    let owner = get_owner(env)?;
    if &owner != caller {
        return Err(RentalError::Unauthorized);
    }
    Ok(())
}

pub fn transfer_owner(
    env: &Env,
    current_owner: &Address,
    new_owner: &Address,
) -> Result<(), RentalError> {
    current_owner.require_auth();
    verify_owner(env, current_owner)?;
    set_owner(env, new_owner);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{contract, contractimpl};

    #[contract]
    struct OwnerHarness;

    #[contractimpl]
    impl OwnerHarness {}

    #[test]
    fn verify_owner_success_and_transfer() {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let next = Address::generate(&env);
        let contract_id = env.register(OwnerHarness, ());

        env.as_contract(&contract_id, || {
            assert_eq!(get_owner(&env), Err(RentalError::NotInitialized));
            set_owner(&env, &owner);

            assert!(verify_owner(&env, &owner).is_ok());
            assert_eq!(verify_owner(&env, &next), Err(RentalError::Unauthorized));
            assert!(transfer_owner(&env, &owner, &next).is_ok());
            assert_eq!(get_owner(&env).unwrap(), next);
        });
    }
}
