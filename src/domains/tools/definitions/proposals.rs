//! Proposal tools.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::api::proposals::{CreateProposalInput, ListProposalsParams, UpdateProposalInput};
use crate::api::MilkeeApi;
use crate::domains::tools::projections::{slim_page, ProposalSummary, SummaryPage};
use crate::domains::tools::registry::{Access, ToolRegistry};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProposalParams {
    #[schemars(description = "Proposal ID")]
    pub id: u64,
    #[schemars(description = "Include relations: customer, contact, project")]
    pub include: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProposalIdParams {
    #[schemars(description = "Proposal ID")]
    pub id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProposalParams {
    #[schemars(description = "Proposal ID")]
    pub id: u64,
    #[serde(flatten)]
    pub data: UpdateProposalInput,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SendProposalParams {
    #[schemars(description = "Proposal ID")]
    pub id: u64,
    #[schemars(description = "Recipient email (defaults to the customer's address)")]
    pub email: Option<String>,
}

pub fn register(registry: &mut ToolRegistry, api: &Arc<MilkeeApi>) {
    let client = Arc::clone(api);
    registry.register(
        "milkee_list_proposals",
        "List proposals with optional filtering",
        Access::ReadOnly,
        move |params: ListProposalsParams| {
            let api = Arc::clone(&client);
            async move {
                let page = api.list_proposals(&params).await?;
                let slim: SummaryPage<ProposalSummary> = slim_page(page);
                Ok(serde_json::to_value(slim)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_get_proposal",
        "Get details of a specific proposal",
        Access::ReadOnly,
        move |params: GetProposalParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.get_proposal(params.id, params.include.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_create_proposal",
        "Create a new proposal",
        Access::ReadWrite,
        move |input: CreateProposalInput| {
            let api = Arc::clone(&client);
            async move {
                let result = api.create_proposal(&input).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_update_proposal",
        "Update an existing proposal",
        Access::ReadWrite,
        move |params: UpdateProposalParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.update_proposal(params.id, &params.data).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_delete_proposal",
        "Delete a proposal",
        Access::ReadWrite,
        move |params: ProposalIdParams| {
            let api = Arc::clone(&client);
            async move {
                api.delete_proposal(params.id).await?;
                Ok(json!({ "success": true, "message": "Proposal deleted" }))
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_send_proposal",
        "Send a proposal to the customer by email",
        Access::ReadWrite,
        move |params: SendProposalParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.send_proposal(params.id, params.email.as_deref()).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );

    let client = Arc::clone(api);
    registry.register(
        "milkee_convert_proposal_to_invoice",
        "Convert an accepted proposal into a draft invoice",
        Access::ReadWrite,
        move |params: ProposalIdParams| {
            let api = Arc::clone(&client);
            async move {
                let result = api.convert_proposal_to_invoice(params.id).await?;
                Ok(serde_json::to_value(result)?)
            }
        },
    );
}
