use std::collections::HashSet;

use crate::config::Role;

/// 접근에 허용되는 역할 집합
///
/// 검증된 사용자 역할 R에 대해 `R ∈ allowed`이면 허가합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRoles {
    allowed: HashSet<Role>,
}

impl RequiredRoles {
    /// 주어진 역할 중 하나라도 있으면 허용 (OR 조건)
    pub fn any_of<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    /// 특정 단일 역할만 허용
    pub fn only(role: Role) -> Self {
        Self::any_of([role])
    }

    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}
