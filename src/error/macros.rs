//! # 错误处理宏

/// 快速创建校验错误的宏
#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::AppError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::validation(format!($fmt, $($arg)*))
    };
}

/// 快速创建数据库错误的宏
#[macro_export]
macro_rules! database_error {
    ($msg:expr) => {
        $crate::error::AppError::database($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::database(format!($fmt, $($arg)*))
    };
}

/// 快速创建认证错误的宏
#[macro_export]
macro_rules! auth_error {
    ($msg:expr) => {
        $crate::error::AppError::auth($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::auth(format!($fmt, $($arg)*))
    };
}

/// 快速创建业务错误的宏
#[macro_export]
macro_rules! business_error {
    ($msg:expr) => {
        $crate::error::AppError::business($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::business(format!($fmt, $($arg)*))
    };
}

/// 快速创建内部错误的宏
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::AppError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::internal(format!($fmt, $($arg)*))
    };
}

/// 确保条件成立，否则返回校验错误
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !($cond) {
            return Err($crate::error::AppError::validation($msg));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::error::AppError::validation(format!($fmt, $($arg)*)));
        }
    };
}
