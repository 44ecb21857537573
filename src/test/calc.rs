#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app::calc::{calculate, is_depreciable, months_elapsed};
    use crate::app::utils::parse_datetime;
    use crate::models::{DepreciationInput, DepreciationMethod, DepreciationResult};

    fn as_of() -> DateTime<Local> {
        parse_datetime("2025-06-01").unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Local> {
        as_of() - Duration::days(days)
    }

    fn input(
        depreciable_cost: Decimal,
        salvage_value: Option<Decimal>,
        asset_life_months: i32,
        depreciation_method: Option<DepreciationMethod>,
        days: i64,
    ) -> DepreciationInput {
        DepreciationInput::new(
            true,
            Some(depreciable_cost),
            salvage_value,
            Some(asset_life_months),
            depreciation_method,
            Some(days_ago(days)),
        )
    }

    #[test]
    fn missing_inputs_give_zero_result() {
        let acquired = Some(days_ago(360));
        let cases = [
            DepreciationInput::new(false, Some(dec!(12000)), None, Some(60), None, acquired),
            DepreciationInput::new(true, None, None, Some(60), None, acquired),
            DepreciationInput::new(true, Some(dec!(12000)), None, None, None, acquired),
            DepreciationInput::new(true, Some(dec!(12000)), None, Some(0), None, acquired),
            DepreciationInput::new(true, Some(dec!(12000)), None, Some(-12), None, acquired),
            DepreciationInput::new(true, Some(dec!(12000)), None, Some(60), None, None),
        ];

        for case in cases {
            assert!(!is_depreciable(&case));
            let result = calculate(&case, &as_of());
            assert_eq!(result, DepreciationResult::zero());
            assert_eq!(*result.monthly_depreciation(), Decimal::ZERO);
            assert_eq!(*result.current_value(), Decimal::ZERO);
            assert_eq!(*result.depreciation_years(), 0);
            assert_eq!(*result.depreciation_months(), 0);
        }
    }

    #[test]
    fn straight_line_after_one_year() {
        let result = calculate(
            &input(
                dec!(12000),
                Some(dec!(0)),
                60,
                Some(DepreciationMethod::StraightLine),
                360,
            ),
            &as_of(),
        );

        assert_eq!(*result.monthly_depreciation(), dec!(200));
        assert_eq!(*result.annual_depreciation(), dec!(2400));
        assert_eq!(*result.months_elapsed(), 12);
        assert_eq!(*result.accumulated_depreciation(), dec!(2400));
        assert_eq!(*result.current_value(), dec!(9600));
        assert_eq!(*result.depreciation_years(), 1);
        assert_eq!(*result.depreciation_months(), 0);
    }

    #[test]
    fn straight_line_subtracts_salvage() {
        let result = calculate(
            &input(dec!(13000), Some(dec!(1000)), 60, None, 450),
            &as_of(),
        );

        assert_eq!(*result.monthly_depreciation(), dec!(200));
        assert_eq!(*result.months_elapsed(), 15);
        assert_eq!(*result.accumulated_depreciation(), dec!(3000));
        assert_eq!(*result.current_value(), dec!(10000));
        assert_eq!(*result.depreciation_years(), 1);
        assert_eq!(*result.depreciation_months(), 3);
    }

    #[test]
    fn elapsed_months_capped_at_asset_life() {
        let ten_years = calculate(&input(dec!(12000), None, 60, None, 3650), &as_of());
        let twenty_years = calculate(&input(dec!(12000), None, 60, None, 7300), &as_of());

        assert_eq!(*ten_years.months_elapsed(), 60);
        assert_eq!(*ten_years.accumulated_depreciation(), dec!(12000));
        assert_eq!(*ten_years.current_value(), Decimal::ZERO);
        assert_eq!(*ten_years.depreciation_years(), 5);
        assert_eq!(*ten_years.depreciation_months(), 0);
        assert_eq!(ten_years, twenty_years);
    }

    #[test]
    fn missing_method_defaults_to_straight_line() {
        let implicit = calculate(&input(dec!(5000), Some(dec!(500)), 36, None, 200), &as_of());
        let explicit = calculate(
            &input(
                dec!(5000),
                Some(dec!(500)),
                36,
                Some(DepreciationMethod::StraightLine),
                200,
            ),
            &as_of(),
        );

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn months_use_thirty_day_approximation() {
        assert_eq!(months_elapsed(&days_ago(89), &as_of(), 60), 2);
        assert_eq!(months_elapsed(&days_ago(90), &as_of(), 60), 3);
        assert_eq!(months_elapsed(&days_ago(29), &as_of(), 60), 0);

        let result = calculate(&input(dec!(12000), None, 60, None, 89), &as_of());
        assert_eq!(*result.months_elapsed(), 2);
        assert_eq!(*result.accumulated_depreciation(), dec!(400));
    }

    #[test]
    fn acquisition_after_evaluation_date_counts_backwards() {
        assert_eq!(months_elapsed(&days_ago(-45), &as_of(), 60), -2);
        assert_eq!(months_elapsed(&days_ago(-30), &as_of(), 60), -1);
        // Part of a day still floors to the earlier day
        let later_that_day = as_of() + Duration::hours(1);
        assert_eq!(months_elapsed(&later_that_day, &as_of(), 60), -1);

        let result = calculate(&input(dec!(12000), None, 60, None, -45), &as_of());
        assert_eq!(*result.months_elapsed(), -2);
        assert_eq!(*result.monthly_depreciation(), dec!(200));
        assert_eq!(*result.accumulated_depreciation(), dec!(-400));
        assert_eq!(*result.current_value(), dec!(12400));
        assert_eq!(*result.depreciation_years(), -1);
        assert_eq!(*result.depreciation_months(), 10);

        let declining = calculate(
            &input(
                dec!(12000),
                None,
                60,
                Some(DepreciationMethod::DecliningBalance),
                -45,
            ),
            &as_of(),
        );
        assert_eq!(*declining.accumulated_depreciation(), Decimal::ZERO);
        assert_eq!(*declining.monthly_depreciation(), Decimal::ZERO);
        assert_eq!(*declining.current_value(), dec!(12000));
    }

    #[test]
    fn overflowing_inputs_give_zero_result() {
        let straight = calculate(
            &input(Decimal::MAX, None, 1, Some(DepreciationMethod::StraightLine), 30),
            &as_of(),
        );
        assert_eq!(straight, DepreciationResult::zero());

        let declining = calculate(
            &input(
                Decimal::MAX,
                None,
                1,
                Some(DepreciationMethod::DecliningBalance),
                30,
            ),
            &as_of(),
        );
        assert_eq!(declining, DepreciationResult::zero());

        let salvage_overflow = calculate(
            &input(Decimal::MAX, Some(Decimal::MIN), 60, None, 30),
            &as_of(),
        );
        assert_eq!(salvage_overflow, DepreciationResult::zero());
    }

    #[test]
    fn declining_balance_iterates_monthly() {
        let result = calculate(
            &input(
                dec!(10000),
                Some(dec!(3000)),
                10,
                Some(DepreciationMethod::DecliningBalance),
                120,
            ),
            &as_of(),
        );

        // 2000 + 1600 + 1280 + 1024
        assert_eq!(*result.accumulated_depreciation(), dec!(5904));
        assert_eq!(*result.monthly_depreciation(), dec!(1476));
        assert_eq!(*result.annual_depreciation(), dec!(17712));
        assert_eq!(*result.current_value(), dec!(4096));
        assert_eq!(*result.depreciation_months(), 4);
    }

    #[test]
    fn declining_balance_snaps_to_salvage() {
        // Remaining value drops to 2621.44 in month 6, under the 3000 salvage.
        let result = calculate(
            &input(
                dec!(10000),
                Some(dec!(3000)),
                10,
                Some(DepreciationMethod::DecliningBalance),
                300,
            ),
            &as_of(),
        );

        assert_eq!(*result.months_elapsed(), 10);
        assert_eq!(*result.accumulated_depreciation(), dec!(7000));
        assert_eq!(*result.monthly_depreciation(), dec!(700));
        assert_eq!(*result.annual_depreciation(), dec!(8400));
        assert_eq!(*result.current_value(), dec!(3000));
        assert_eq!(*result.depreciation_years(), 0);
        assert_eq!(*result.depreciation_months(), 10);
    }

    #[test]
    fn declining_balance_without_salvage_never_snaps() {
        let result = calculate(
            &input(
                dec!(10000),
                None,
                10,
                Some(DepreciationMethod::DecliningBalance),
                60,
            ),
            &as_of(),
        );

        assert_eq!(*result.accumulated_depreciation(), dec!(3600));
        assert_eq!(*result.monthly_depreciation(), dec!(1800));
        assert_eq!(*result.current_value(), dec!(6400));
    }

    #[test]
    fn declining_balance_with_no_elapsed_months() {
        let result = calculate(
            &input(
                dec!(10000),
                Some(dec!(1000)),
                10,
                Some(DepreciationMethod::DecliningBalance),
                10,
            ),
            &as_of(),
        );

        assert_eq!(*result.monthly_depreciation(), Decimal::ZERO);
        assert_eq!(*result.annual_depreciation(), Decimal::ZERO);
        assert_eq!(*result.accumulated_depreciation(), Decimal::ZERO);
        assert_eq!(*result.current_value(), dec!(10000));
    }

    #[test]
    fn salvage_above_cost_propagates_arithmetically() {
        let straight = calculate(&input(dec!(1000), Some(dec!(2200)), 12, None, 30), &as_of());
        assert_eq!(*straight.monthly_depreciation(), dec!(-100));
        assert_eq!(*straight.current_value(), dec!(1100));

        let declining = calculate(
            &input(
                dec!(1000),
                Some(dec!(2000)),
                10,
                Some(DepreciationMethod::DecliningBalance),
                30,
            ),
            &as_of(),
        );
        assert_eq!(*declining.accumulated_depreciation(), dec!(-1000));
        assert_eq!(*declining.current_value(), dec!(2000));
    }

    #[test]
    fn method_labels() {
        assert_eq!(
            DepreciationMethod::from_label(Some("Declining Balance")),
            DepreciationMethod::DecliningBalance
        );
        assert_eq!(
            DepreciationMethod::from_label(Some("Straight-line")),
            DepreciationMethod::StraightLine
        );
        assert_eq!(
            DepreciationMethod::from_label(Some("sum-of-years")),
            DepreciationMethod::StraightLine
        );
        assert_eq!(DepreciationMethod::from_label(None), DepreciationMethod::StraightLine);
        assert_eq!(
            DepreciationMethod::DecliningBalance.to_string(),
            "Declining Balance"
        );
    }
}
