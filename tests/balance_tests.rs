mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use split_engine::services::BalanceCalculator;

#[test]
fn test_conservation_of_money() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob", "Carol", "Dave"]);

    group.add_expense(common::expense(
        "Dinner",
        dec!(120),
        ids[0],
        &[
            (ids[0], dec!(30)),
            (ids[1], dec!(30)),
            (ids[2], dec!(30)),
            (ids[3], dec!(30)),
        ],
    ));
    group.add_expense(common::taxed_expense(
        "Groceries",
        dec!(222),
        ids[1],
        dec!(11),
        &[(ids[1], dec!(120)), (ids[2], dec!(80))],
    ));
    group.add_expense(common::expense(
        "Taxi",
        dec!(45),
        ids[2],
        &[(ids[0], dec!(15)), (ids[3], dec!(30))],
    ));

    let balances = BalanceCalculator::balances(&group);
    let total: Decimal = balances.values().copied().sum();
    assert!(total.abs() < dec!(0.000001), "nets must sum to zero, got {total}");
}

#[test]
fn test_zero_item_expense_is_inert() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob"]);
    group.add_expense(common::expense("Nothing", dec!(999), ids[0], &[]));

    let balances = BalanceCalculator::balances(&group);
    assert_eq!(balances[&ids[0]], Decimal::ZERO);
    assert_eq!(balances[&ids[1]], Decimal::ZERO);
}

#[test]
fn test_tax_proportionality() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob", "Payer"]);
    group.add_expense(common::taxed_expense(
        "Dinner",
        dec!(330),
        ids[2],
        dec!(10),
        &[(ids[0], dec!(100)), (ids[1], dec!(200))],
    ));

    let balances = BalanceCalculator::balances(&group);
    assert_eq!(balances[&ids[0]], dec!(-110));
    assert_eq!(balances[&ids[1]], dec!(-220));
    assert_eq!(balances[&ids[2]], dec!(330));
}

#[test]
fn test_no_tax_path_ignores_percentage() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob", "Payer"]);
    let mut expense = common::expense(
        "Dinner",
        dec!(300),
        ids[2],
        &[(ids[0], dec!(100)), (ids[1], dec!(200))],
    );
    // A percentage on a non-tax expense must change nothing.
    expense.tax_percentage = dec!(10);
    group.add_expense(expense);

    let balances = BalanceCalculator::balances(&group);
    assert_eq!(balances[&ids[0]], dec!(-100));
    assert_eq!(balances[&ids[1]], dec!(-200));
    assert_eq!(balances[&ids[2]], dec!(300));
}

#[test]
fn test_idempotence() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob"]);
    group.add_expense(common::taxed_expense(
        "Dinner",
        dec!(111),
        ids[0],
        dec!(11),
        &[(ids[0], dec!(40)), (ids[1], dec!(60))],
    ));

    let first = BalanceCalculator::balances(&group);
    let second = BalanceCalculator::balances(&group);
    assert_eq!(first, second);
}

#[test]
fn test_dangling_payer_credits_nobody() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob"]);
    group.add_expense(common::expense(
        "Orphan",
        dec!(100),
        Uuid::new_v4(),
        &[(ids[0], dec!(50)), (ids[1], dec!(50))],
    ));

    let balances = BalanceCalculator::balances(&group);
    let credited: Decimal = balances.values().filter(|b| **b > Decimal::ZERO).sum();
    assert_eq!(credited, Decimal::ZERO);
    assert_eq!(balances[&ids[0]], dec!(-50));
    assert_eq!(balances[&ids[1]], dec!(-50));
}

#[test]
fn test_empty_group_yields_empty_map() {
    let (group, _) = common::group_of(&[]);
    assert!(BalanceCalculator::balances(&group).is_empty());
}

#[test]
fn test_payer_only_consuming_own_expense_nets_zero() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob"]);
    group.add_expense(common::expense(
        "Solo lunch",
        dec!(25),
        ids[0],
        &[(ids[0], dec!(25))],
    ));

    let balances = BalanceCalculator::balances(&group);
    assert_eq!(balances[&ids[0]], Decimal::ZERO);
    assert_eq!(balances[&ids[1]], Decimal::ZERO);
}

#[test]
fn test_uneven_tax_split_conserves_money() {
    let (mut group, ids) = common::group_of(&["Alice", "Bob", "Carol"]);
    // Shares that do not divide evenly under the proportional tax split.
    group.add_expense(common::taxed_expense(
        "Dinner",
        dec!(111),
        ids[0],
        dec!(11),
        &[
            (ids[0], dec!(33.33)),
            (ids[1], dec!(33.33)),
            (ids[2], dec!(33.34)),
        ],
    ));

    let balances = BalanceCalculator::balances(&group);
    let total: Decimal = balances.values().copied().sum();
    assert!(total.abs() < dec!(0.000001), "nets must sum to zero, got {total}");
}
