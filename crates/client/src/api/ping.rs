use http::Method;
use shared::{api::Object, model::NoValidation};

use super::ApiClient;
use crate::ClientError;

impl ApiClient {
    pub async fn ping(&self) -> Result<(), ClientError> {
        self.json_request(Method::GET, Object::Ping.path(), None::<&NoValidation<()>>).await
    }
}
