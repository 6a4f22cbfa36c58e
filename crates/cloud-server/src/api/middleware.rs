//! Экстракторы: политика доступа и JSON-тело с ошибками в формате API.

use crate::api::AppState;
use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

/// Политика доступа к `/api`.
///
/// Аутентификация в сервисе отключена; политика остаётся точкой
/// подключения на границе обработчиков, валидатор о ней ничего не знает.
pub trait AccessPolicy: Send + Sync {
    fn check(&self, parts: &Parts) -> Result<(), AppError>;
}

/// Политика по умолчанию: пропускать всех.
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check(&self, _parts: &Parts) -> Result<(), AppError> {
        Ok(())
    }
}

/// Экстрактор: запрос прошёл политику доступа.
pub struct Authorized;

impl FromRequestParts<AppState> for Authorized {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state.policy.check(parts)?;
        Ok(Authorized)
    }
}

/// `Json`, отклоняющий некорректное тело через [`AppError::BadRequest`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
