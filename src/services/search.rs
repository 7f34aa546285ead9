use crate::domain::criteria::FilterCriteria;
use crate::domain::reference::ReferenceData;
use crate::domain::ticket::TicketRecord;
use crate::dto::search::{FormOptions, SearchPageData, TicketRow};
use crate::filter;
use crate::forms::FormError;
use crate::forms::search::{FilterDraft, SearchTicketsForm};
use crate::gateway::{ReferenceReader, TicketReader};
use crate::pagination::{PAGE_SIZE_OPTIONS, Paginated, paginate};
use crate::services::{ServiceError, ServiceResult};

/// Loads clients, funds and situations concurrently.
///
/// The lists are all-or-nothing: one failed fetch fails the whole load.
pub async fn load_reference_data<R>(repo: &R) -> ServiceResult<ReferenceData>
where
    R: ReferenceReader + ?Sized,
{
    let (clients, funds, situations) = futures::try_join!(
        repo.list_clients(),
        repo.list_funds(),
        repo.list_situations()
    )
    .map_err(|err| {
        log::error!("Failed to load reference data: {err}");
        ServiceError::ReferenceDataLoad(err)
    })?;

    Ok(ReferenceData::new(clients, funds, situations))
}

/// Runs a search and cuts the requested page out of the matching boletas.
///
/// The criteria are forwarded to the remote service and then applied again
/// locally, so a service answering with the full set still yields only
/// matching records.
pub async fn search_tickets<R>(
    repo: &R,
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> ServiceResult<Paginated<TicketRecord>>
where
    R: TicketReader + ?Sized,
{
    let fetched = repo.search_tickets(criteria).await.map_err(|err| {
        log::error!("Failed to search boletas: {err}");
        ServiceError::SearchLoad(err)
    })?;

    let fetched_count = fetched.len();
    let matching = filter::apply(criteria, fetched);
    if matching.len() != fetched_count {
        log::debug!(
            "Local refinement kept {} of {fetched_count} boletas",
            matching.len()
        );
    }

    Ok(paginate(matching, page, page_size)?)
}

fn rejected_form(
    options: FormOptions,
    draft: FilterDraft,
    err: FormError,
    query: String,
) -> SearchPageData {
    log::warn!("Rejected search form: {err}");
    SearchPageData {
        options,
        draft,
        tickets: None,
        form_error: Some(ServiceError::from(err).user_message()),
        query,
    }
}

/// Loads everything the search page needs.
///
/// Reference data failures abort the whole page. Invalid filters still
/// render the form, with the validation message and without results.
pub async fn load_search_page<R>(
    repo: &R,
    form: &SearchTicketsForm,
    default_page_size: usize,
) -> ServiceResult<SearchPageData>
where
    R: ReferenceReader + TicketReader + ?Sized,
{
    let reference = load_reference_data(repo).await?;
    let options = FormOptions::new(&reference, &PAGE_SIZE_OPTIONS);
    let query = form.query_without_page();

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(err) => return Ok(rejected_form(options, form.echo_draft(), err, query)),
    };
    let criteria = match draft.submit() {
        Ok(criteria) => criteria,
        Err(err) => return Ok(rejected_form(options, draft, err, query)),
    };

    let page = form.page.unwrap_or(1);
    let page_size = form.per_page.unwrap_or(default_page_size);
    let tickets = search_tickets(repo, &criteria, page, page_size)
        .await?
        .map(|record| TicketRow::new(record, &reference));

    Ok(SearchPageData {
        options,
        draft,
        tickets: Some(tickets),
        form_error: None,
        query,
    })
}
