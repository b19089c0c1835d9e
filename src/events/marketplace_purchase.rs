use serde::{Deserialize, Serialize};

use crate::events::GitHubUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePurchaseEvent {
    pub action: String,
    pub effective_date: String,
    pub marketplace_purchase: MarketplacePurchase,
    // only set for 'changed' and 'cancelled'
    pub previous_marketplace_purchase: Option<MarketplacePurchase>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePurchase {
    pub account: MarketplaceAccount,
    pub billing_cycle: String,
    pub unit_count: u64,
    pub on_free_trial: bool,
    pub free_trial_ends_on: Option<String>,
    pub next_billing_date: Option<String>,
    pub plan: MarketplacePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceAccount {
    pub login: String,
    pub id: u64,
    pub r#type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePlan {
    pub id: u64,
    pub name: String,
    pub monthly_price_in_cents: u64,
    pub yearly_price_in_cents: u64,
    pub price_model: String,
    pub unit_name: Option<String>,
}
