use crate::config;
use crate::error::HandoffError;

const GENERIC_MESSAGE: &str = "Hi! I'd like to order gas";

/// Message pre-filled in the WhatsApp chat. Any size string is accepted as is.
pub fn order_message(plan_size: Option<&str>) -> String {
    match plan_size {
        Some(size) => format!("I'd like to order a {} cylinder", size),
        None => GENERIC_MESSAGE.to_string(),
    }
}

pub fn build_order_url(plan_size: Option<&str>) -> String {
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        config::WHATSAPP_NUMBER,
        urlencoding::encode(&order_message(plan_size))
    )
}

/// Toast copy for one handoff, picked by whether a plan was chosen.
#[derive(Clone, Debug, PartialEq)]
pub struct HandoffCopy {
    pub pending: String,
    pub success: String,
    pub error: String,
}

impl HandoffCopy {
    pub fn for_plan(plan_size: Option<&str>) -> Self {
        match plan_size {
            Some(size) => Self {
                pending: format!("Processing {} order...", size),
                success: format!("Opening WhatsApp for {} order!", size),
                error: "Could not process order".to_string(),
            },
            None => Self {
                pending: "Connecting to WhatsApp...".to_string(),
                success: "Opening WhatsApp chat!".to_string(),
                error: "Could not connect".to_string(),
            },
        }
    }
}

/// Opens `url` in a new browsing context, like `target="_blank"`.
pub fn open_in_new_context(url: &str) -> Result<(), HandoffError> {
    let window = web_sys::window().ok_or(HandoffError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HandoffError::Blocked),
        Err(e) => Err(HandoffError::Open(format!("{:?}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_text(url: &str) -> String {
        let (_, text) = url.split_once("?text=").expect("url has a text parameter");
        urlencoding::decode(text).expect("valid utf-8").into_owned()
    }

    #[test]
    fn plan_url_decodes_to_plan_message() {
        let url = build_order_url(Some("19kg"));
        assert!(url.starts_with("https://wa.me/27637195979?text="));
        assert_eq!(decoded_text(&url), "I'd like to order a 19kg cylinder");
    }

    #[test]
    fn generic_url_decodes_to_default_message() {
        let url = build_order_url(None);
        assert_eq!(decoded_text(&url), "Hi! I'd like to order gas");
    }

    #[test]
    fn forty_eight_kg_url_is_exact() {
        assert_eq!(
            build_order_url(Some("48kg")),
            "https://wa.me/27637195979?text=I%27d%20like%20to%20order%20a%2048kg%20cylinder"
        );
    }

    #[test]
    fn spaces_and_apostrophes_are_percent_encoded() {
        let url = build_order_url(None);
        let (_, text) = url.split_once("?text=").unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\''));
        assert!(text.contains("%20"));
        assert!(text.contains("%27"));
    }

    #[test]
    fn arbitrary_sizes_are_accepted() {
        assert_eq!(decoded_text(&build_order_url(Some(""))), "I'd like to order a  cylinder");
        let odd = "5kg & 9kg?#";
        assert_eq!(
            decoded_text(&build_order_url(Some(odd))),
            "I'd like to order a 5kg & 9kg?# cylinder"
        );
        // reserved characters must not leak into the query string
        assert!(!build_order_url(Some(odd)).contains('#'));
    }

    #[test]
    fn copy_depends_on_plan() {
        let generic = HandoffCopy::for_plan(None);
        assert_eq!(generic.pending, "Connecting to WhatsApp...");
        assert_eq!(generic.success, "Opening WhatsApp chat!");
        assert_eq!(generic.error, "Could not connect");

        let plan = HandoffCopy::for_plan(Some("9kg"));
        assert_eq!(plan.pending, "Processing 9kg order...");
        assert_eq!(plan.success, "Opening WhatsApp for 9kg order!");
        assert_eq!(plan.error, "Could not process order");
    }
}
