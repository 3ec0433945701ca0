// payroll_client/units.rs
//
// Every monetary argument of the program is in lamports. Callers that speak SOL
// convert at the boundary.

pub use solana_program::native_token::LAMPORTS_PER_SOL;

use crate::error::ClientError;

/// Rounds to the nearest lamport.
pub fn sol_to_lamports(sol: f64) -> Result<u64, ClientError> {
    if !sol.is_finite() || sol < 0.0 {
        return Err(ClientError::InvalidSolAmount(sol));
    }

    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports >= u64::MAX as f64 {
        return Err(ClientError::InvalidSolAmount(sol));
    }

    Ok(lamports as u64)
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
