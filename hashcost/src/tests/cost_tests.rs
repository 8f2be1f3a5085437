// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::cost::CostLevel;
use crate::error::HashCostError;

#[test]
fn test_bounds() {
    assert_eq!(CostLevel::new(4).unwrap(), CostLevel::MIN);
    assert_eq!(CostLevel::new(31).unwrap(), CostLevel::MAX);
    assert_eq!(
        CostLevel::new(3),
        Err(HashCostError::InvalidCost {
            cost: 3,
            min: 4,
            max: 31
        })
    );
    assert!(CostLevel::new(32).is_err());
    assert!(CostLevel::try_from(0u32).is_err());
    assert_eq!(u32::from(CostLevel::try_from(12u32).unwrap()), 12);
}

#[test]
fn test_range_inclusive() {
    let start = CostLevel::new(10).unwrap();
    let end = CostLevel::new(13).unwrap();
    let values: Vec<u32> = CostLevel::range_inclusive(start, end)
        .map(|c| c.value())
        .collect();
    assert_eq!(values, vec![10, 11, 12, 13]);

    assert_eq!(CostLevel::range_inclusive(end, end).count(), 1);
    assert_eq!(CostLevel::range_inclusive(end, start).count(), 0);
    assert_eq!(
        CostLevel::range_inclusive(CostLevel::MIN, CostLevel::MAX).count(),
        28
    );
}

#[test]
fn test_display() {
    assert_eq!(CostLevel::new(12).unwrap().to_string(), "12");
    assert_eq!(
        HashCostError::InvalidCost {
            cost: 40,
            min: 4,
            max: 31
        }
        .to_string(),
        "Cost 40 is outside the accepted range 4..=31"
    );
}
