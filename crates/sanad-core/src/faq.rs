//! Static FAQ reference data.

use serde::{Deserialize, Serialize};

/// A frequently asked question. Read-only reference data; nothing in the
/// core ever mutates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
  pub category: String,
  pub question: String,
  pub answer:   String,
}

impl Faq {
  fn new(category: &str, question: &str, answer: &str) -> Self {
    Faq {
      category: category.to_string(),
      question: question.to_string(),
      answer:   answer.to_string(),
    }
  }
}

/// The FAQs shipped with the portal.
pub fn builtin_faqs() -> Vec<Faq> {
  vec![
    Faq::new(
      "General",
      "Where is the Saylani campus located?",
      "Our main campus is located in Bahadurabad, Karachi. We also have \
       multiple branches across major cities in Pakistan.",
    ),
    Faq::new(
      "Programs",
      "Why choose our courses?",
      "We offer industry-standard training with certified professionals, \
       completely free of cost for deserving students, focusing on \
       practical skills and job placement.",
    ),
    Faq::new(
      "Careers",
      "Which program is best for freelancing?",
      "Graphic Design and Web Development are excellent for quick \
       freelancing starts. Our 'Freelancing & Business' program \
       specifically trains you on how to secure international clients.",
    ),
    Faq::new(
      "Registration",
      "How do I get my ID card?",
      "After successful form submission, a digital ID card is automatically \
       generated. You can download it immediately or find it via your \
       registered email/WhatsApp.",
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_set_is_stable() {
    let faqs = builtin_faqs();
    assert_eq!(faqs.len(), 4);
    assert_eq!(faqs[0].category, "General");
    assert!(faqs[3].answer.contains("ID card"));
  }
}
