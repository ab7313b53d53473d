use rodcut_dp::{solve_memoized, solve_tabulated, CutError, CutPlan, Price};

fn both(length: i64, prices: &[Price]) -> CutPlan {
    let memo = solve_memoized(length, prices).unwrap();
    let table = solve_tabulated(length, prices).unwrap();
    assert_eq!(memo, table, "strategies disagree on {prices:?}");
    memo
}

#[test]
fn textbook_five() {
    let plan = both(5, &[2, 5, 7, 8, 10]);
    assert_eq!(plan.max_profit, 12);
    // [2, 3], [1, 2, 2] and others also reach 12; the shortest first piece wins.
    assert_eq!(plan.cuts, vec![1, 2, 2]);
    assert_eq!(plan.number_of_cuts, 2);
}

#[test]
fn selling_uncut_dominates() {
    let plan = both(3, &[1, 3, 8]);
    assert_eq!(plan.max_profit, 8);
    assert_eq!(plan.cuts, vec![3]);
    assert_eq!(plan.number_of_cuts, 0);
}

#[test]
fn uniform_unit_pieces() {
    let plan = both(4, &[3, 5, 6, 7]);
    assert_eq!(plan.max_profit, 12);
    assert_eq!(plan.cuts, vec![1, 1, 1, 1]);
    assert_eq!(plan.number_of_cuts, 3);
}

#[test]
fn clrs_ten() {
    let prices = [1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
    let plan = both(10, &prices);
    assert_eq!(plan.max_profit, 30);
    assert_eq!(plan.cuts, vec![10]);

    let plan = both(7, &prices[..7]);
    assert_eq!(plan.max_profit, 18);
    assert_eq!(plan.cuts, vec![1, 6]);
}

#[test]
fn invalid_lengths() {
    for length in [0, -3] {
        assert_eq!(
            solve_memoized(length, &[1, 2]),
            Err(CutError::InvalidLength(length))
        );
        assert_eq!(
            solve_tabulated(length, &[1, 2]),
            Err(CutError::InvalidLength(length))
        );
    }
}

#[test]
fn price_table_mismatch() {
    let expected = Err(CutError::PriceTableMismatch {
        length: 5,
        prices: 4,
    });
    assert_eq!(solve_memoized(5, &[1, 2, 3, 4]), expected);
    assert_eq!(solve_tabulated(5, &[1, 2, 3, 4]), expected);
}
