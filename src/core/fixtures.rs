//! Static page content
//!
//! Everything the landing page renders is hard-coded here. Icon fields hold
//! names understood by [`crate::ui::icon::Icon`].

/// In-page navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Feature card in the "Core Features" grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One step of the "How It Works" strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Sample point shared by every chart on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub time: &'static str,
    pub value: f64,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    /// Star count, 1 to 5
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub is_popular: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Trade setup card shown in the dashboard "signals" tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalCard {
    pub pair: &'static str,
    pub verdict: &'static str,
    pub age: &'static str,
    pub entry_zone: &'static str,
    pub take_profit: &'static str,
    pub stop_loss: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    /// Single-letter badge text
    pub fn badge(&self) -> &'static str {
        match self {
            PositionSide::Long => "L",
            PositionSide::Short => "S",
        }
    }
}

/// Row of the "Active Signals" list in the overview tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSignal {
    pub symbol: &'static str,
    pub side: PositionSide,
    pub entry: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const BRAND: &str = "TradeNexus";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "How it Works", href: "#how-it-works" },
    NavItem { label: "Live Demo", href: "#demo" },
    NavItem { label: "Pricing", href: "#pricing" },
];

/// Section ids rendered by the landing page; every nav href points at one.
pub const SECTION_IDS: &[&str] = &["features", "how-it-works", "demo", "pricing"];

pub const CHART_DATA: &[ChartPoint] = &[
    ChartPoint { time: "10:00", value: 4000.0, confidence: 85 },
    ChartPoint { time: "10:05", value: 3000.0, confidence: 80 },
    ChartPoint { time: "10:10", value: 2000.0, confidence: 88 },
    ChartPoint { time: "10:15", value: 2780.0, confidence: 92 },
    ChartPoint { time: "10:20", value: 1890.0, confidence: 95 },
    ChartPoint { time: "10:25", value: 2390.0, confidence: 89 },
    ChartPoint { time: "10:30", value: 3490.0, confidence: 94 },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Elena Rodriguez",
        role: "Forex Trader",
        company: "Alpha Capital",
        content: "The emotional detachment this AI provides is a game changer. My win rate improved by 35% in the first month alone.",
        image: "https://picsum.photos/100/100?random=1",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Marcus Chen",
        role: "Portfolio Manager",
        company: "Zenith Global",
        content: "Enterprise-grade analytics at a fraction of the cost. The confidence scoring system is incredibly accurate.",
        image: "https://picsum.photos/100/100?random=2",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Sarah Jenkins",
        role: "Day Trader",
        company: "Self-Employed",
        content: "Finally, a tool that actually helps clarify the noise rather than adding to it. The UI is simply beautiful.",
        image: "https://picsum.photos/100/100?random=3",
        rating: 4,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "1",
        title: "AI Market Prediction",
        description: "Proprietary algorithms analyze millions of data points to forecast market movements.",
        icon: "trending-up",
    },
    Feature {
        id: "2",
        title: "Smart Trade Signals",
        description: "Receive clear, actionable buy and sell signals with entry and exit points.",
        icon: "zap",
    },
    Feature {
        id: "3",
        title: "Risk Management AI",
        description: "Automated position sizing and stop-loss suggestions to protect your capital.",
        icon: "shield",
    },
    Feature {
        id: "4",
        title: "Real-Time Analysis",
        description: "Zero-latency processing of global market data feeds.",
        icon: "activity",
    },
    Feature {
        id: "5",
        title: "Emotion-Free Trading",
        description: "Remove human bias and psychology from your trading strategy.",
        icon: "lock",
    },
    Feature {
        id: "6",
        title: "Multi-Asset Support",
        description: "Trade Crypto, Stocks, Forex, and Commodities from a single dashboard.",
        icon: "globe",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { title: "Connect", description: "Link your exchange securely via API keys.", icon: "lock" },
    ProcessStep { title: "Analyze", description: "AI scans the market 24/7 for opportunities.", icon: "cpu" },
    ProcessStep { title: "Signal", description: "Receive high-probability trade setups.", icon: "zap" },
    ProcessStep { title: "Execute", description: "Trade manually or enable auto-execution.", icon: "check" },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$49",
        features: &["Real-time Market Data", "Basic AI Signals", "5 Assets", "Email Support"],
        is_popular: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$129",
        features: &[
            "Advanced AI Models",
            "Unlimited Assets",
            "Auto-Execution",
            "Priority Support",
            "Risk AI",
        ],
        is_popular: true,
    },
    PricingPlan {
        name: "Elite",
        price: "$299",
        features: &[
            "Institutional Data Feed",
            "API Access",
            "Dedicated Account Mgr",
            "Custom Strategies",
            "Zero Latency",
        ],
        is_popular: false,
    },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "How does the AI prediction model work?",
        answer: "Our model uses a combination of LSTM neural networks and Sentiment Analysis algorithms, processing over 500 market indicators in real-time to generate probability-based signals.",
    },
    FaqItem {
        question: "Can I connect my own brokerage account?",
        answer: "Yes, we support API integration with major exchanges including Binance, Coinbase Pro, Interactive Brokers, and TD Ameritrade.",
    },
    FaqItem {
        question: "Is my data secure?",
        answer: "We use bank-grade AES-256 encryption for all data. Your API keys are stored locally on your device or in an encrypted vault, and we never have withdrawal permissions.",
    },
];

const ETH_SETUP: SignalCard = SignalCard {
    pair: "ETH/USDT",
    verdict: "STRONG BUY",
    age: "2m ago",
    entry_zone: "2,450 - 2,460",
    take_profit: "2,600",
    stop_loss: "2,380",
};

pub const SIGNAL_CARDS: &[SignalCard] = &[ETH_SETUP; 6];

pub const ACTIVE_SIGNALS: &[ActiveSignal] = &[
    ActiveSignal { symbol: "BTC-PERP", side: PositionSide::Long, entry: "64,200" },
    ActiveSignal { symbol: "TSLA", side: PositionSide::Short, entry: "240.50" },
    ActiveSignal { symbol: "XAUUSD", side: PositionSide::Long, entry: "2021.00" },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Platform",
        links: &["Features", "Live Demo", "Pricing", "API Docs"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Blog", "Contact"],
    },
    FooterColumn {
        heading: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Risk Disclosure"],
    },
];

/// The plan that carries the "Most Popular" badge, if any
pub fn popular_plan() -> Option<&'static PricingPlan> {
    PRICING_PLANS.iter().find(|plan| plan.is_popular)
}
