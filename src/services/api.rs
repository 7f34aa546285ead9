use crate::dto::api::TicketsResponse;
use crate::forms::search::SearchTicketsForm;
use crate::gateway::TicketReader;
use crate::services::ServiceResult;
use crate::services::search::search_tickets;

/// Returns the requested page of boletas matching the query parameters.
pub async fn list_tickets<R>(
    repo: &R,
    form: &SearchTicketsForm,
    default_page_size: usize,
) -> ServiceResult<TicketsResponse>
where
    R: TicketReader + ?Sized,
{
    let criteria = form.to_draft()?.submit()?;

    let page = form.page.unwrap_or(1);
    let page_size = form.per_page.unwrap_or(default_page_size);

    let tickets = search_tickets(repo, &criteria, page, page_size).await?;

    Ok(TicketsResponse::from(tickets))
}
