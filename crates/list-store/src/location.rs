//! Address Bar Seam

/// The page address, as far as sharing is concerned
pub trait AddressBar {
    /// Raw query string, with or without the leading `?`, still percent-encoded
    fn query(&self) -> String;

    /// Origin and path of the current page, without query or fragment
    fn base_url(&self) -> String;

    /// Drop the query string from the visible address without reloading
    fn strip_query(&mut self);
}
