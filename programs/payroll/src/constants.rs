// payroll/constants.rs

use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// The organization name is a PDA seed, so it is bounded by MAX_SEED_LEN.
#[constant]
pub const MAX_NAME_LEN: usize = 32;
