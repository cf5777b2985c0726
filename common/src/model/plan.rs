//! The fixed credit-pack catalog shown on the pricing screen. Prices are
//! whole rupees; the backend converts to the gateway's smallest unit when
//! minting the order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub credits: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "starter",
        name: "Starter",
        description: "Perfect for trying out our AI tools",
        price: 99,
        credits: 50,
        features: &[
            "50 AI Credits",
            "Basic Generators",
            "Standard Support",
            "Email Support",
            "Basic Analytics",
        ],
        popular: false,
    },
    Plan {
        id: "pro",
        name: "Pro Creator",
        description: "Best for professionals and creators",
        price: 199,
        credits: 120,
        features: &[
            "120 AI Credits",
            "All AI Tools",
            "SEO Optimizer",
            "Priority Support",
            "Advanced Analytics",
            "API Access",
            "Custom Templates",
        ],
        popular: true,
    },
    Plan {
        id: "enterprise",
        name: "Power User",
        description: "For teams and power users",
        price: 499,
        credits: 500,
        features: &[
            "500 AI Credits",
            "Everything Unlocked",
            "Bulk Processing",
            "24/7 Support",
            "Dedicated Manager",
            "Custom Integration",
            "White-label Options",
        ],
        popular: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_well_formed() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        for pair in PLANS.windows(2) {
            assert!(pair[0].price < pair[1].price, "prices must ascend");
            assert!(pair[0].credits < pair[1].credits, "credits must ascend");
        }
        for plan in &PLANS {
            assert!(plan.credits > 0);
            assert!(!plan.features.is_empty());
        }
    }
}
