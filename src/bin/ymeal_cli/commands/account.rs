// ABOUTME: Account commands for ymeal-cli
// ABOUTME: Validates registration input before an account backend exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use ymeal::account::RegistrationForm;
use ymeal::errors::AppResult;

/// Validate a registration form
pub fn register(email: String, password: String, confirm: String) -> AppResult<()> {
    let form = RegistrationForm::new(email, password, confirm);
    form.validate()?;
    println!("Compte en cours de création (bientôt).");
    Ok(())
}
