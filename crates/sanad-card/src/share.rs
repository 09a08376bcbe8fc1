//! WhatsApp share deep link.
//!
//! Fire-and-forget: the caller opens the URL in a new context; there is no
//! response to handle.

use sanad_core::registration::Registration;

/// The support contact the pre-filled message goes to.
pub const SUPPORT_WHATSAPP: &str = "923111729526";

/// Build the pre-filled WhatsApp message URL for a fresh registration.
pub fn whatsapp_share_url(registration: &Registration) -> String {
  let message = format!(
    "Assalamu Alaikum! My name is {}. I have successfully registered for \
     the {} program at Saylani. Here is my ID: {}",
    registration.full_name, registration.program, registration.id
  );
  format!(
    "https://wa.me/{SUPPORT_WHATSAPP}?text={}",
    urlencoding::encode(&message)
  )
}
