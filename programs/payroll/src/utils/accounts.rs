// payroll/utils/accounts.rs

// external dependencies
use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
};

// Creates a rent-exempt account of `space` bytes at a PDA of this program.
// An address that already holds lamports (sent by anyone) is topped up and
// then allocated and assigned, mirroring what `init` does.
pub fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    // A PDA that already belongs to this program has been initialized before
    if new_account.owner != &system_program::ID || !new_account.data_is_empty() {
        return err!(ErrorCode::AccountDiscriminatorAlreadySet);
    }

    let rent_exempt_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                signer_seeds,
            ),
            rent_exempt_lamports,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent_exempt_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
