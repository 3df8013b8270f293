pub mod event;

/// Redis に保存するアクセストークン
pub struct AccessToken(pub String);
