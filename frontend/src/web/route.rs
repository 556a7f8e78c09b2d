//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

const PRODUCT_PREFIX: &str = "/products/";

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面
    Login,
    /// 商品列表 (默认路由)
    #[default]
    ProductList,
    /// 商品详情，携带路由中的原始 id
    ProductDetail(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::ProductList,
            "/login" => Self::Login,
            _ => match trimmed.strip_prefix(PRODUCT_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::ProductDetail(id.to_string())
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::ProductList => "/".to_string(),
            Self::ProductDetail(id) => format!("{}{}", PRODUCT_PREFIX, id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 详情页的商品 id
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Self::ProductDetail(id) => Some(id),
            _ => None,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::ProductList
    }

    /// 注销后的重定向目标
    pub fn logout_redirect() -> Self {
        Self::Login
    }

    /// 路由对应的页面组件（忽略路由参数）
    pub fn page(&self) -> Page {
        match self {
            Self::Login => Page::Login,
            Self::ProductList => Page::ProductList,
            Self::ProductDetail(_) => Page::ProductDetail,
            Self::NotFound => Page::NotFound,
        }
    }
}

/// 页面种类，路由参数变化时保持不变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    ProductList,
    ProductDetail,
    NotFound,
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::ProductList);
        assert_eq!(AppRoute::from_path(""), AppRoute::ProductList);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(
            AppRoute::from_path("/products/42"),
            AppRoute::ProductDetail("42".to_string())
        );
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
    }

    #[test]
    fn test_product_id_is_verbatim() {
        let route = AppRoute::from_path("/products/abc");
        assert_eq!(route.product_id(), Some("abc"));
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/1/reviews"), AppRoute::NotFound);
    }

    #[test]
    fn test_round_trip_paths() {
        for route in [
            AppRoute::Login,
            AppRoute::ProductList,
            AppRoute::ProductDetail("7".to_string()),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_same_page_ignores_params() {
        let a = AppRoute::ProductDetail("1".to_string());
        let b = AppRoute::ProductDetail("2".to_string());
        assert_eq!(a.page(), b.page());
        assert_ne!(a.page(), AppRoute::ProductList.page());
    }

    #[test]
    fn test_redirect_rules() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::ProductList.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::ProductList);
        assert_eq!(AppRoute::logout_redirect(), AppRoute::Login);
    }
}
