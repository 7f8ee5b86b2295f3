use crate::model::quote::{HomeSize, MoveType, QuoteRequest};

/// Flat surcharge for professional packing, in dollars.
const PACKING_SURCHARGE: f64 = 300.0;
/// Flat surcharge for temporary storage, in dollars.
const STORAGE_SURCHARGE: f64 = 200.0;

/// Offsets of the displayed cost band around the point estimate. Business
/// constants with no derivation; keep as-is.
const RANGE_LOW_OFFSET: i64 = 200;
const RANGE_HIGH_OFFSET: i64 = 300;

/// Displayed cost band around a point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateRange {
    pub low: i64,
    pub high: i64,
}

fn base_cost(move_type: MoveType) -> f64 {
    match move_type {
        MoveType::Local => 400.0,
        MoveType::LongDistance => 1200.0,
        MoveType::Commercial => 800.0,
    }
}

fn size_multiplier(home_size: HomeSize) -> f64 {
    match home_size {
        HomeSize::Studio => 0.7,
        HomeSize::OneBedroom => 1.0,
        HomeSize::TwoBedroom => 1.4,
        HomeSize::ThreeBedroom => 1.8,
        HomeSize::FourBedroom => 2.2,
        HomeSize::FivePlusBedroom => 2.8,
        HomeSize::Office => 1.5,
        HomeSize::Warehouse => 3.0,
    }
}

/// Point estimate in whole dollars. Pure and cheap; the quote form calls
/// this on every input change and the submission path calls it once more
/// for the authoritative figure.
pub fn estimate_cost(
    move_type: MoveType,
    home_size: HomeSize,
    packing_service: bool,
    storage_service: bool,
) -> i64 {
    let mut cost = base_cost(move_type) * size_multiplier(home_size);
    if packing_service {
        cost += PACKING_SURCHARGE;
    }
    if storage_service {
        cost += STORAGE_SURCHARGE;
    }
    cost.round() as i64
}

pub fn estimate_for(request: &QuoteRequest) -> i64 {
    estimate_cost(
        request.move_type,
        request.home_size,
        request.packing_service,
        request.storage_service,
    )
}

pub fn estimate_range(estimate: i64) -> EstimateRange {
    EstimateRange {
        low: estimate - RANGE_LOW_OFFSET,
        high: estimate + RANGE_HIGH_OFFSET,
    }
}
