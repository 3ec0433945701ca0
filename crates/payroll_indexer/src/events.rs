// payroll_indexer/events.rs

use std::sync::OnceLock;

use anchor_lang::{AnchorDeserialize, Discriminator};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use payroll::events::{
    OrganizationCreated, PayrollProcessed, TreasuryFunded, TreasuryWithdrawn, WorkerAdded,
};
use regex::Regex;

const DISCRIMINATOR_SIZE: usize = 8;
const DATA_PREFIX: &str = "Program data: ";

pub enum PayrollEvent {
    OrganizationCreated(OrganizationCreated),
    WorkerAdded(WorkerAdded),
    TreasuryFunded(TreasuryFunded),
    TreasuryWithdrawn(TreasuryWithdrawn),
    PayrollProcessed(PayrollProcessed),
}

fn instruction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Program log: Instruction: (.+)").unwrap())
}

/// Every payroll event found in a transaction's log messages, in order.
pub fn parse_logs_for_events<S: AsRef<str>>(logs: &[S]) -> Vec<PayrollEvent> {
    logs.iter().filter_map(|l| parse_log_for_event(l.as_ref())).collect()
}

pub fn parse_logs_for_instruction_names<S: AsRef<str>>(logs: &[S]) -> Vec<String> {
    logs.iter()
        .filter_map(|l| instruction_regex().captures(l.as_ref()))
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Decodes a single `Program data:` line. Lines from other programs, or
/// anything that does not decode, yield `None`.
pub fn parse_log_for_event(log: &str) -> Option<PayrollEvent> {
    let encoded = log.strip_prefix(DATA_PREFIX)?;
    let data = STANDARD.decode(encoded.trim()).ok()?;

    if data.len() < DISCRIMINATOR_SIZE {
        return None;
    }

    let (discriminator, buffer) = data.split_at(DISCRIMINATOR_SIZE);

    if OrganizationCreated::DISCRIMINATOR == discriminator {
        return OrganizationCreated::try_from_slice(buffer)
            .ok()
            .map(PayrollEvent::OrganizationCreated);
    }
    if WorkerAdded::DISCRIMINATOR == discriminator {
        return WorkerAdded::try_from_slice(buffer).ok().map(PayrollEvent::WorkerAdded);
    }
    if TreasuryFunded::DISCRIMINATOR == discriminator {
        return TreasuryFunded::try_from_slice(buffer).ok().map(PayrollEvent::TreasuryFunded);
    }
    if TreasuryWithdrawn::DISCRIMINATOR == discriminator {
        return TreasuryWithdrawn::try_from_slice(buffer)
            .ok()
            .map(PayrollEvent::TreasuryWithdrawn);
    }
    if PayrollProcessed::DISCRIMINATOR == discriminator {
        return PayrollProcessed::try_from_slice(buffer)
            .ok()
            .map(PayrollEvent::PayrollProcessed);
    }

    None
}
