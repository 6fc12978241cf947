// src/site/content.rs
// Static copy for the landing and setup pages.

pub const PRODUCT_NAME: &str = "AI Code Review Bot";

pub const TAGLINE: &str =
    "Automatic pull-request reviews powered by GPT-4o. Faster feedback, fewer regressions.";

pub const INSTALL_LINK: Link = Link {
    text: "Install the GitHub App",
    href: "/setup",
};

pub const TEST_API_TEXT: &str = "Test Backend API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        title: "Create GitHub App",
        detail: "Give it PR & contents permissions; add webhook URL from backend.",
    },
    Step {
        title: "Deploy backend",
        detail: "Use Railway. Copy the public webhook URL into your GitHub App.",
    },
    Step {
        title: "Deploy this site",
        detail: "Vercel → import /frontend, set links to your App’s installation URL.",
    },
    Step {
        title: "Open a PR",
        detail: "Bot posts a single consolidated review comment. Commit again to refresh.",
    },
];

pub const WHY_HEADING: &str = "Why teams use this";

pub const WHY_POINTS: [&str; 3] = [
    "Surface risky changes early (security/perf/correctness).",
    "Standardize style without human back-and-forth.",
    "Lightweight, configurable via .aicodereview.yml.",
];

pub const SETUP_HEADING: &str = "Setup";

pub const SETUP_INSTRUCTIONS: [&str; 6] = [
    "Deploy the backend (Railway). Copy the public /webhook URL.",
    "Create a GitHub App (Developer settings → GitHub Apps). Use the webhook URL.",
    "Grant permissions: Pull requests: Read & write, Contents: Read, Metadata: Read.",
    "Subscribe to events: Pull request.",
    "Generate private key → base64 encode → save in backend env.",
    "Install the App on your repo(s). Open a PR to see the bot in action.",
];
