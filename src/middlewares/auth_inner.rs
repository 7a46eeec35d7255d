//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::domain::auth::AuthenticatedIdentity;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req) {
                Ok(identity) => {
                    log::debug!("인증 성공: 사용자 ID {}", identity.user_id);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(identity);
                }
                Err(err) => {
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, err.error_response())
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출하고 액세스 토큰으로 검증
///
/// 검증 실패 사유는 로그에만 남기고, 클라이언트에는 만료 여부만 구분해 전달합니다.
fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedIdentity, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService is not registered".to_string()))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = TokenService::extract_bearer_token(header).inspect_err(|err| {
        log::warn!("인증 실패: {} ({})", err, req.path());
    })?;

    let claims = token_service.verify_access_token(token).map_err(|err| {
        log::warn!("토큰 검증 실패: {} ({})", err, req.path());
        err.client_facing()
    })?;

    Ok(AuthenticatedIdentity::from(claims))
}
