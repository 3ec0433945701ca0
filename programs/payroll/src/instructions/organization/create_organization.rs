// payroll/instructions/organization/create_organization.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::ANCHOR_DISCRIMINATOR_SIZE,
    events::OrganizationCreated,
    state::{Organization, ORGANIZATION_SEED},
    utils::accounts::create_program_account,
};

#[derive(Accounts)]
pub struct CreateOrganization<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: the name has to pass validation before it can be used as a seed,
    /// so the address is derived and the account created inside the handler
    #[account(mut)]
    pub org: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateOrganization>, name: String) -> Result<()> {
    Organization::validate_name(&name)?;

    let authority = ctx.accounts.authority.key();
    let (expected_org, bump) = Organization::derive_address(&authority, &name);

    require_keys_eq!(ctx.accounts.org.key(), expected_org, ErrorCode::ConstraintSeeds);

    let org_seeds: &[&[&[u8]]] = &[&[
        ORGANIZATION_SEED,
        authority.as_ref(),
        name.as_bytes(),
        &[bump],
    ]];

    create_program_account(
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.org.to_account_info(),
        ANCHOR_DISCRIMINATOR_SIZE + Organization::INIT_SPACE,
        org_seeds,
        &ctx.accounts.system_program.to_account_info(),
    )?;

    let created_at = Clock::get()?.unix_timestamp;

    let org = Organization {
        authority,
        name,
        treasury: 0,
        workers_count: 0,
        created_at,
        bump,
    };

    {
        let org_info = ctx.accounts.org.to_account_info();
        let mut data = org_info.try_borrow_mut_data()?;
        org.try_serialize(&mut &mut data[..])?;
    }

    msg!("Organization '{}' created", org.name);

    emit!(OrganizationCreated {
        org: expected_org,
        authority,
        name: org.name,
        ts: created_at,
    });

    Ok(())
}
