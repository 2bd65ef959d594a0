use log::Level;

/// Destination for every order handoff, digits only.
pub const WHATSAPP_NUMBER: &str = "27637195979";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const HANDOFF_DELAY_MS: u32 = 1000;
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const TOAST_LINGER_MS: u32 = 4000;

pub const COMPANY_NAME: &str = "The Gas Company";
pub const COMPANY_URL: &str = "https://www.thegascompany.co.za/";
pub const LOGO_URL: &str = "https://i.postimg.cc/VkhcC3LR/TGC-LOGO-HORISONTAL.png";
pub const CHAT_PREVIEW_URL: &str = "https://i.ibb.co/rK36vpzz/Hi.jpg";
pub const CYLINDER_IMAGE_URL: &str = "https://tpc.googlesyndication.com/simgad/18244048150968669015";
pub const FOUNDED_YEAR: i32 = 1947;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
