//! 역할 기반 인가 미들웨어
//!
//! [`AuthMiddleware`](super::AuthMiddleware)가 저장한 사용자 정보의 역할을 확인합니다.
//! 인증 미들웨어 안쪽에 배치해야 하며, actix에서는 나중에 `wrap`한 미들웨어가
//! 먼저 실행되므로 `Authorize`를 먼저 `wrap`합니다.
//!
//! ```rust,ignore
//! web::scope("/admin")
//!     .wrap(Authorize::only(Role::Admin))
//!     .wrap(AuthMiddleware::required())
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, ResponseError,
};
use futures_util::future::LocalBoxFuture;

use crate::config::Role;
use crate::core::AppError;
use crate::domain::auth::{AuthenticatedIdentity, RequiredRoles};

/// 역할 허용 목록 검사 미들웨어
#[derive(Debug, Clone)]
pub struct Authorize {
    required: RequiredRoles,
}

impl Authorize {
    pub fn any_of<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            required: RequiredRoles::any_of(roles),
        }
    }

    pub fn only(role: Role) -> Self {
        Self {
            required: RequiredRoles::only(role),
        }
    }

    /// 모든 역할 허용 (인증만 요구)
    pub fn any_role() -> Self {
        Self::any_of([Role::User, Role::Admin, Role::Moderator, Role::Premium])
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authorize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthorizeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizeService {
            service: Rc::new(service),
            required: self.required.clone(),
        }))
    }
}

pub struct AuthorizeService<S> {
    service: Rc<S>,
    required: RequiredRoles,
}

impl<S, B> Service<ServiceRequest> for AuthorizeService<S>
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
        let decision = self.check(&req);

        Box::pin(async move {
            if let Err(err) = decision {
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, err.error_response()).map_into_right_body();
                return Ok(res);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

impl<S> AuthorizeService<S> {
    fn check(&self, req: &ServiceRequest) -> Result<(), AppError> {
        let extensions = req.extensions();
        let identity = extensions
            .get::<AuthenticatedIdentity>()
            .ok_or_else(|| AppError::AuthenticationError("Authentication required".to_string()))?;

        if !self.required.is_satisfied(identity.role) {
            log::warn!(
                "권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                identity.user_id,
                identity.role,
                self.required
            );
            return Err(AppError::AuthorizationError(
                "You do not have permission to access this resource".to_string(),
            ));
        }

        Ok(())
    }
}
