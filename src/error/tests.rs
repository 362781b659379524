//! # 错误处理测试

use crate::error::{AppError, Context};
use axum::http::StatusCode;
use std::error::Error;

#[test]
fn test_config_error_creation() {
    let err = AppError::config("测试配置错误");
    assert!(matches!(err, AppError::Config { .. }));
    assert_eq!(err.to_string(), "配置错误: 测试配置错误");
}

#[test]
fn test_database_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "文件不存在");
    let err = AppError::database_with_source("数据库文件打开失败", io_err);

    assert!(matches!(err, AppError::Database { .. }));
    assert!(err.to_string().contains("数据库错误: 数据库文件打开失败"));
    assert!(err.source().is_some());
}

#[test]
fn test_validation_error_on_field() {
    let err = AppError::validation_on("电话号码必填", "phone_number");
    match err {
        AppError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("phone_number")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_context_trait() {
    let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "权限不足",
    ));

    let err = result.context("读取配置文件失败").unwrap_err();
    assert!(matches!(err, AppError::Context { .. }));
    assert_eq!(err.to_string(), "读取配置文件失败");
    assert!(err.source().is_some());
}

#[test]
fn test_http_response_parts() {
    let cases = [
        (AppError::validation("x"), StatusCode::BAD_REQUEST),
        (AppError::not_found("client", "1"), StatusCode::NOT_FOUND),
        (AppError::conflict("sales_goal", "1"), StatusCode::CONFLICT),
        (AppError::auth("x"), StatusCode::UNAUTHORIZED),
        (
            AppError::database("x"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_http_response_parts().0, expected);
    }
}

#[test]
fn test_context_keeps_inner_status() {
    let err = AppError::Context {
        context: "更新客户失败".to_string(),
        source: Box::new(AppError::not_found("client", "42")),
    };
    assert_eq!(err.to_http_response_parts().0, StatusCode::NOT_FOUND);
}

#[test]
fn test_ensure_macro() {
    fn guard(value: i32) -> crate::error::Result<()> {
        crate::ensure!(value > 0, "值必须为正数: {}", value);
        Ok(())
    }

    assert!(guard(1).is_ok());
    let err = guard(-1).unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert!(err.to_string().contains("值必须为正数"));
}
