//! # DTO 校验辅助
//!
//! 供各特性 DTO 的 `validate` 实现复用的小型校验函数

use rust_decimal::Decimal;

use crate::error::{AppError, Result};

/// 必填字符串：不能缺失、不能只包含空白字符
pub fn required_str<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation_on(format!("{field} 必填"), field)),
    }
}

/// 限制字符串最大长度
pub fn max_len(value: Option<&str>, limit: usize, field: &str) -> Result<()> {
    if let Some(v) = value {
        if v.len() > limit {
            return Err(AppError::validation_on(
                format!("{field} 长度不能超过 {limit} 个字符"),
                field,
            ));
        }
    }
    Ok(())
}

/// 可选整数的闭区间约束
pub fn in_range(value: Option<i32>, min: i32, max: i32, field: &str) -> Result<()> {
    if let Some(v) = value {
        if v < min || v > max {
            return Err(AppError::validation_on(
                format!("{field} 必须在 {min} 到 {max} 之间"),
                field,
            ));
        }
    }
    Ok(())
}

/// 可选整数非负约束
pub fn non_negative(value: Option<i32>, field: &str) -> Result<()> {
    if let Some(v) = value {
        if v < 0 {
            return Err(AppError::validation_on(
                format!("{field} 不能为负数"),
                field,
            ));
        }
    }
    Ok(())
}

/// 必填字段的通用判空
pub fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| AppError::validation_on(format!("{field} 必填"), field))
}

/// 必填小数的闭区间约束
pub fn decimal_in_range(
    value: Option<Decimal>,
    min: Decimal,
    max: Decimal,
    field: &str,
) -> Result<()> {
    if let Some(v) = value {
        if v < min || v > max {
            return Err(AppError::validation_on(
                format!("{field} 必须在 {min} 到 {max} 之间"),
                field,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_str() {
        assert!(required_str(Some("John"), "first_name").is_ok());
        assert!(required_str(Some("  "), "first_name").is_err());
        assert!(required_str(None, "first_name").is_err());
    }

    #[test]
    fn test_max_len() {
        assert!(max_len(Some("ok"), 10, "field").is_ok());
        assert!(max_len(None, 10, "field").is_ok());
        assert!(max_len(Some(&"a".repeat(11)), 10, "field").is_err());
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(Some(5), 1, 99, "bedrooms").is_ok());
        assert!(in_range(Some(0), 1, 99, "bedrooms").is_err());
        assert!(in_range(None, 1, 99, "bedrooms").is_ok());
    }

    #[test]
    fn test_decimal_in_range() {
        let zero = Decimal::ZERO;
        let one = Decimal::ONE;
        assert!(decimal_in_range(Some(Decimal::new(25, 2)), zero, one, "commission_rate").is_ok());
        assert!(decimal_in_range(Some(Decimal::from(2)), zero, one, "commission_rate").is_err());
    }
}
