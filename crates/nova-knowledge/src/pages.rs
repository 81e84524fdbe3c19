// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static copy: the welcome screen, menu pages and product pages.

use nova_core::Keyboard;

/// Label of the reply-keyboard button that opens the mini-app.
pub const WEBAPP_BUTTON: &str = "⚡ OPEN NOVA SYSTEM";

/// Placeholder shown in the input field while the main keyboard is open.
pub const INPUT_PLACEHOLDER: &str = "Select action or type your question...";

pub const PRICES_BUTTON: &str = "💰 Prices & Products";
pub const DELIVERY_BUTTON: &str = "🚀 Fast Delivery";
pub const PAYMENT_BUTTON: &str = "💳 Crypto Payments";
pub const SUPPORT_BUTTON: &str = "🔧 Technical Support";

/// Main menu rows below the mini-app button.
pub const MENU_ROWS: [[&str; 2]; 2] = [
    [PRICES_BUTTON, DELIVERY_BUTTON],
    [PAYMENT_BUTTON, SUPPORT_BUTTON],
];

/// Inline product buttons as `(label, callback data)`.
pub const PRODUCT_BUTTONS: [(&str, &str); 4] = [
    ("🤖 AI Agents", "product_ai"),
    ("🌐 Data Scrapers", "product_scraper"),
    ("👥 Community Tools", "product_comm"),
    ("💰 All Prices", "all_prices"),
];

pub const WELCOME: &str = "🟦 **NOVA SYSTEMS**\n\n\
Professional automation for Telegram business.\n\n\
We create systems that:\n\
• Work 24/7 without breaks\n\
• Scale to millions of users\n\
• Provide immediate value\n\n\
🇺🇸 Focused on US/EU markets\n\
✅ Professional solutions\n\n\
👇 **Initialize the system:**";

/// A static page and the keyboard that goes with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Page {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

/// The page for an exact main-menu button text, if `text` is one.
pub fn menu_page(text: &str, wallet: &str) -> Option<Page> {
    let page = match text {
        PRICES_BUTTON => Page {
            text: PRICES_PAGE.to_string(),
            keyboard: Some(Keyboard::Products),
        },
        DELIVERY_BUTTON => Page::plain(DELIVERY_PAGE),
        PAYMENT_BUTTON => Page::plain(payment_page(wallet)),
        SUPPORT_BUTTON => Page::plain(SUPPORT_PAGE),
        _ => return None,
    };
    Some(page)
}

/// The product page for inline callback `data`, if it is a known button.
pub fn product_page(data: &str) -> Option<&'static str> {
    match data {
        "product_ai" => Some(AI_AGENTS_PAGE),
        "product_scraper" => Some(SCRAPERS_PAGE),
        "product_comm" => Some(COMMUNITY_PAGE),
        "all_prices" => Some(ALL_PRICES_PAGE),
        _ => None,
    }
}

fn payment_page(wallet: &str) -> String {
    format!(
        "💳 **NOVA Payment System:**\n\n\
We accept only cryptocurrency:\n\n\
✅ **Why crypto is better:**\n\
• Instant confirmation\n\
• No personal data\n\
• Available worldwide\n\
• Low fees (save 3-5%)\n\
• No payment reversal risk\n\n\
💰 **Accepted currencies:**\n\
• USDT (TRC20/ERC20)\n\
• TON\n\
• Bitcoin\n\
• Ethereum\n\n\
**Payment Wallet:**\n\
`{wallet}`\n\n\
Send transaction hash after payment for activation."
    )
}

const PRICES_PAGE: &str = "💰 **NOVA Investment Structure:**\n\n\
🤖 **Automated Agents:**\n\
• Standard: $290 (basic functionality)\n\
• Enterprise: $890 (full customization)\n\n\
🌐 **Data Scrapers:**\n\
• Standard: $250 (1 source)\n\
• Enterprise: $750 (up to 5 sources)\n\n\
👥 **Community Tools:**\n\
• Standard: $190 (basic management)\n\
• Enterprise: $590 (full automation)\n\n\
🎯 **All licenses include:**\n\
- One-time payment\n\
- Lifetime use\n\
- Complete source code\n\
- 30-day support\n\n\
Select a product for details:";

const DELIVERY_PAGE: &str = "⚡ **NOVA Delivery Process:**\n\n\
1. **Crypto Payment** → Instant confirmation\n\
2. **System Setup** → 2-4 hours\n\
3. **Testing** → Your approval\n\
4. **Final** → Complete package\n\n\
⏱️ **Delivery Time:**\n\
• Standard versions: 1 business day\n\
• Enterprise versions: 1-3 business days\n\n\
📦 **Included:**\n\
✓ Source Code\n\
✓ Installation Manual\n\
✓ Config Files\n\
✓ Setup Assistance (1h)\n\
✓ Private Support Channel";

const SUPPORT_PAGE: &str = "🛡️ **NOVA SYSTEMS Support:**\n\n\
**Included with every purchase:**\n\
✓ 30 days technical support\n\
✓ Installation and setup help\n\
✓ Fix any issues\n\
✓ Answer questions\n\n\
**Lifetime benefits:**\n\
✓ Security updates\n\
✓ Critical bug fixes\n\
✓ Community access\n\
✓ Documentation updates\n\n\
**Enterprise adds:**\n\
✓ Priority 24/7 support\n\
✓ Direct developer access\n\
✓ Custom feature requests\n\
✓ Monthly check-ins\n\n\
Our goal is your success.";

const AI_AGENTS_PAGE: &str = "🤖 **NOVA Automated Agents:**\n\n\
Systems that work like your best employee, but without breaks:\n\n\
**Standard ($290):**\n\
• Smart Auto-Reply\n\
• Admin Panel (Basic)\n\
• Context Memory (24 hours)\n\
• Languages: EN & RU\n\
• Integration: Telegram + Web\n\n\
**Enterprise ($890):**\n\
• Advanced Responses\n\
• Full Dashboard\n\
• Unlimited Memory\n\
• Multi-Language\n\
• Full Customization\n\
• All Platforms + API\n\n\
Perfect for: customer support, sales, lead collection.";

const SCRAPERS_PAGE: &str = "🌐 **NOVA Data Scrapers:**\n\n\
Professional data collection from protected websites:\n\n\
**Standard ($250):**\n\
• Target Sites: 1 Source\n\
• Speed: Standard\n\
• Export: CSV/Excel/JSON\n\
• Alerts: Email\n\
• Proxy Support: Basic\n\n\
**Enterprise ($750):**\n\
• Target Sites: Up to 5\n\
• Speed: Real-time\n\
• Export: API + Webhooks\n\
• Alerts: Telegram Instant\n\
• Proxy Support: Advanced\n\
• Anti-Detect Technology\n\n\
Perfect for: price monitoring, competitor analysis, data collection.";

const COMMUNITY_PAGE: &str = "👥 **NOVA Community Tools:**\n\n\
Complete automation of community management and monetization:\n\n\
**Standard ($190):**\n\
• Anti-Spam: AI Filtering\n\
• Welcome Msg: Text + Media\n\
• Payments: Manual Verify\n\
• Max Users: 10,000\n\
• Analytics: Basic\n\n\
**Enterprise ($590):**\n\
• Anti-Spam: Advanced AI\n\
• Welcome: Custom Media + Voice\n\
• Payments: Auto USDT/TON\n\
• Max Users: Unlimited\n\
• Analytics: Advanced\n\
• Auto-Kick: Non-Payers\n\n\
Perfect for: channel monetization, group management, content protection.";

const ALL_PRICES_PAGE: &str = "💰 **Complete Price Structure:**\n\n\
🤖 AI Agents: $290 / $890\n\
🌐 Data Scrapers: $250 / $750\n\
👥 Community Tools: $190 / $590\n\n\
**All versions include:**\n\
- One-time payment\n\
- Lifetime license\n\
- Full source code\n\
- 30-day support\n\n\
Enterprise adds full customization and priority support.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_page_carries_products_keyboard() {
        let page = menu_page(PRICES_BUTTON, "W").unwrap();
        assert_eq!(page.keyboard, Some(Keyboard::Products));
        assert!(page.text.ends_with("Select a product for details:"));
    }

    #[test]
    fn payment_page_shows_wallet() {
        let page = menu_page(PAYMENT_BUTTON, "TQwallet").unwrap();
        assert!(page.text.contains("`TQwallet`"));
        assert_eq!(page.keyboard, None);
    }

    #[test]
    fn menu_match_is_exact() {
        assert!(menu_page("🚀 fast delivery", "W").is_none());
        assert!(menu_page(DELIVERY_BUTTON, "W").is_some());
        assert!(menu_page(SUPPORT_BUTTON, "W").is_some());
    }

    #[test]
    fn every_product_button_has_a_page() {
        for (_, data) in PRODUCT_BUTTONS {
            assert!(product_page(data).is_some(), "no page for {data}");
        }
        assert_eq!(product_page("product_unknown"), None);
    }

    #[test]
    fn continuation_lines_keep_indentation_out() {
        assert!(WELCOME.contains("\n• Work 24/7 without breaks\n"));
        assert!(!DELIVERY_PAGE.contains("\n "));
    }
}
