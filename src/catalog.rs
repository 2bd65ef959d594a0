use crate::components::icons::Icon;

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub size: &'static str,
    pub price: &'static str,
    pub note: &'static str,
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan { id: "9kg", size: "9kg", price: "R340", note: "Exchange only", popular: false },
    PricingPlan { id: "19kg", size: "19kg", price: "R715", note: "Exchange only", popular: true },
    PricingPlan { id: "48kg", size: "48kg", price: "R1,810", note: "Exchange only", popular: false },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I start ordering?",
        answer: "Simply send a WhatsApp message to +27 63 719 5979 saying \"Hi\" or \"3\" to order gas. Our bot will guide you through the entire process.",
    },
    FaqEntry {
        question: "What payment methods are accepted?",
        answer: "We accept all major credit and debit cards through our secure payment gateway. Payment is processed directly in the WhatsApp ordering flow.",
    },
    FaqEntry {
        question: "How long does delivery take?",
        answer: "We offer same-day delivery (4-8 hours), next-day delivery, and standard delivery (within 5 days). Choose your preferred option during checkout.",
    },
    FaqEntry {
        question: "Do you deliver to my area?",
        answer: "We deliver across Gauteng and major cities in South Africa. Enter your address during checkout to confirm availability.",
    },
    FaqEntry {
        question: "Can I track my delivery?",
        answer: "Yes! Once confirmed, you'll receive WhatsApp updates with tracking information and estimated delivery time.",
    },
    FaqEntry {
        question: "Can I cancel or change my order?",
        answer: "You can cancel or modify your order on WhatsApp before dispatch. Our team will assist you promptly.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature { icon: Icon::Clock, title: "24/7 Available", description: "Order anytime, even at midnight. Our bot never sleeps." },
    Feature { icon: Icon::Smartphone, title: "No App Needed", description: "Use WhatsApp you already have. No downloads required." },
    Feature { icon: Icon::Zap, title: "Super Fast", description: "Complete your order in under 60 seconds." },
    Feature { icon: Icon::ShieldCheck, title: "Secure Payment", description: "Encrypted payment processing. Your data is safe." },
    Feature { icon: Icon::Truck, title: "Same-Day Delivery", description: "Get your gas within hours. Choose your window." },
    Feature { icon: Icon::History, title: "Order History", description: "Reorder with one message. History saved in chat." },
];

pub const STEPS: &[Step] = &[
    Step { number: "1", title: "Say Hi", description: "Send \"Hi\" to our WhatsApp bot to start ordering." },
    Step { number: "2", title: "Browse", description: "View our catalog and select your gas cylinder size." },
    Step { number: "3", title: "Details", description: "Enter your address and choose delivery time." },
    Step { number: "4", title: "Done!", description: "Pay securely and we'll deliver same-day." },
];

pub const TRUST_BADGES: &[&str] = &["Same-day delivery", "Secure payment", "24/7 support"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn popular_plan() -> Option<&'static PricingPlan> {
        PRICING_PLANS.iter().find(|plan| plan.popular)
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(popular_plan().map(|p| p.size), Some("19kg"));
    }

    #[test]
    fn plan_ids_are_unique() {
        let ids: HashSet<_> = PRICING_PLANS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRICING_PLANS.len());
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(PRICING_PLANS.len(), 3);
        assert_eq!(FAQ_ENTRIES.len(), 6);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STEPS.len(), 4);
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, (i + 1).to_string());
        }
    }
}
