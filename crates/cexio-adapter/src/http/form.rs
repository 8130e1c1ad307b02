/*
[INPUT]:  API key, signature, nonce, optional order and optional order id
[OUTPUT]: Form fields for signed POST requests
[POS]:    HTTP layer - request body construction for private endpoints
[UPDATE]: When private endpoints gain or rename form fields
*/

use std::collections::BTreeMap;

use crate::types::OrderRequest;

/// Urlencoded form body of a private call
///
/// Keys are encoded in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    fields: BTreeMap<&'static str, String>,
}

impl FormParams {
    /// Build the signed form for a private call
    pub fn private(
        api_key: &str,
        signature: &str,
        nonce: &str,
        order: Option<&OrderRequest>,
        id: Option<&str>,
    ) -> Self {
        let mut form = Self::default();
        form.set("key", api_key);
        form.set("signature", signature);
        form.set("nonce", nonce);

        if let Some(order) = order {
            form.set("order_type", order.order_type().as_str());
            form.set("type", order.side().as_str());
            form.set("amount", order.amount().to_string());
            if let Some(price) = order.price() {
                form.set("price", price.to_string());
            }
        }

        if let Some(id) = id.filter(|id| !id.is_empty()) {
            form.set("id", id);
        }

        form
    }

    fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    #[cfg(test)]
    fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// `application/x-www-form-urlencoded` body sent by private calls
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}
