//! # 实体定义测试
//!
//! 测试实体的创建与计算展示属性

#[cfg(test)]
mod tests {
    use crate::{appointments, clients, properties, sales, sales_goals, users};
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use sea_orm::Set;

    fn user(first: Option<&str>, last: Option<&str>) -> users::Model {
        users::Model {
            id: "u-1".to_string(),
            username: "jdoe@example.com".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: first.map(ToString::to_string),
            last_name: last.map(ToString::to_string),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .expect("valid date")
                .and_hms_opt(0, 0, 0)
                .expect("valid time"),
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .expect("valid date")
                .and_hms_opt(0, 0, 0)
                .expect("valid time"),
        }
    }

    #[rstest]
    #[case(Some("John"), Some("Doe"), "Doe, John")]
    #[case(None, Some("Doe"), "Doe")]
    #[case(Some("John"), None, "John")]
    #[case(None, None, "jdoe@example.com")]
    fn test_user_full_name(
        #[case] first: Option<&str>,
        #[case] last: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(user(first, last).full_name(), expected);
    }

    #[rstest]
    #[case(Some(""), Some("  "), "jdoe@example.com")]
    #[case(Some(" "), Some("Doe"), "Doe")]
    fn test_user_full_name_blank_parts(
        #[case] first: Option<&str>,
        #[case] last: Option<&str>,
        #[case] expected: &str,
    ) {
        // 空白字符串视同缺失
        assert_eq!(user(first, last).full_name(), expected);
    }

    #[test]
    fn test_client_full_name_and_phone() {
        let client = clients::Model {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "1234567890".to_string(),
            email: None,
            street: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
            birthdate: None,
            occupation: None,
            employer: None,
            referred_by: None,
            notes: None,
            created: None,
            created_by: None,
            last_modified: None,
            last_modified_by: None,
        };

        assert_eq!(client.full_name_and_phone(), "Doe, John; Phone: 1234567890");
    }

    #[test]
    fn test_property_full_address() {
        let property = properties::Model {
            id: 1,
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "NY".to_string(),
            zip_code: "12345".to_string(),
            country: None,
            year_built: None,
            bedrooms: None,
            full_bathrooms: None,
            half_bathrooms: None,
            square_footage: None,
            number_of_levels: None,
            lot_size: None,
            property_kind: Some(properties::PropertyKind::SingleFamilyHome),
            description: None,
            created: None,
            created_by: None,
            last_modified: None,
            last_modified_by: None,
        };

        assert_eq!(property.full_address(), "123 Main St Anytown, NY 12345");
    }

    #[test]
    fn test_sale_creation() {
        // 测试成交记录 ActiveModel 可以正常创建
        let sale = sales::ActiveModel {
            owned_by_id: Set("u-1".to_string()),
            property_id: Set(1),
            client_id: Set(2),
            sale_side: Set(sales::SaleSide::Buyer),
            closing_date: Set(NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")),
            sale_price: Set(Decimal::new(30_000_000, 2)),
            commission_rate: Set(Decimal::new(250, 4)),
            ..Default::default()
        };

        assert_eq!(sale.owned_by_id.as_ref(), "u-1");
        assert_eq!(sale.sale_side.as_ref(), &sales::SaleSide::Buyer);
        assert_eq!(sale.sale_price.as_ref(), &Decimal::new(30_000_000, 2));
    }

    #[test]
    fn test_sales_goal_creation() {
        let goal = sales_goals::ActiveModel {
            owned_by_id: Set("u-1".to_string()),
            goal_month_year: Set(NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")),
            goal_amount: Set(Decimal::new(50_000_000, 2)),
            ..Default::default()
        };

        assert_eq!(goal.owned_by_id.as_ref(), "u-1");
        assert_eq!(
            goal.goal_month_year.as_ref(),
            &NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
        );
    }

    #[test]
    fn test_appointment_creation() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1)
            .expect("valid date")
            .and_hms_opt(9, 0, 0)
            .expect("valid time");
        let appointment = appointments::ActiveModel {
            start: Set(start),
            end: Set(start + chrono::Duration::hours(1)),
            title: Set("Showing".to_string()),
            is_all_day: Set(false),
            ..Default::default()
        };

        assert_eq!(appointment.title.as_ref(), "Showing");
        assert_eq!(appointment.is_all_day.as_ref(), &false);
    }
}
