/// Hosted form-intake endpoint the quote form posts to.
///
/// Formspree has no sandbox mode, so dev and release builds share the
/// same endpoint.
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/xblonndj"
}
