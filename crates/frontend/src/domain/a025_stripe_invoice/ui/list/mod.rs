pub mod state;

use contracts::domain::a002_organization::aggregate::Organization;
use contracts::domain::a025_stripe_invoice::aggregate::Invoice;
use contracts::shared::pagination::INVOICES_PAGE_SIZE;
use contracts::system::auth::PermissionAction;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, FetchTicket, CHECKING_FOR_INVOICES};
use crate::domain::a025_stripe_invoice::api;
use crate::domain::a025_stripe_invoice::download::{open_in_new_tab, resolve_download};
use crate::shared::date_utils::format_epoch_seconds;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::number_format::format_amount;
use crate::system::auth::guard::RequirePermission;

const INVOICES_RESOURCE: &str = "invoices";

/// Invoices of one organization, gated on read access to invoices
#[component]
pub fn InvoicesSettingsPage(#[prop(into)] organization: Signal<Organization>) -> impl IntoView {
    view! {
        <RequirePermission
            action=PermissionAction::Read
            resource=INVOICES_RESOURCE
            resource_text="view invoices"
        >
            <InvoicesList organization=organization />
        </RequirePermission>
    }
}

#[component]
fn InvoicesList(organization: Signal<Organization>) -> impl IntoView {
    let notifier = use_notifications();
    let state = create_state();

    let load_page = move |ticket: FetchTicket| {
        let Some((customer_id, offset)) =
            state.try_with_untracked(|s| (s.customer_id.clone(), s.offset_for(ticket)))
        else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_invoices(&customer_id, offset, INVOICES_PAGE_SIZE).await;
            // `None` once the list is unmounted
            let _ = state.try_update(|s| s.finish_list(ticket, result, &notifier));
        });
    };

    let load_count = move |ticket: FetchTicket, customer_id: String| {
        spawn_local(async move {
            let result = api::fetch_invoice_count(&customer_id).await;
            let _ = state.try_update(|s| s.finish_count(ticket, result, &notifier));
        });
    };

    let customer_id = Memo::new(move |_| organization.with(|o| o.stripe_customer_id.clone()));

    // Mount and every customer change: page 1 and count fire together
    Effect::new(move |_| {
        let customer_id = customer_id.get();
        let Some(started) = state.try_update(|s| s.start_customer(&customer_id)) else {
            // list already disposed
            return;
        };
        let Some(ticket) = started else {
            log::debug!("organization has no billing customer, nothing to load");
            return;
        };
        load_page(ticket);
        load_count(ticket, customer_id.trim().to_string());
    });

    let go_to_page = move |page: usize| {
        if let Some(ticket) = state.try_update(|s| s.start_page(page)) {
            load_page(ticket);
        }
    };

    let download = move |invoice_id: String| {
        spawn_local(async move {
            let result = api::fetch_invoice(&invoice_id).await;
            if let Some(url) = resolve_download(result, &notifier) {
                open_in_new_tab(&url);
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let prev_disabled = Signal::derive(move || state.with(|s| !s.can_go_previous()));
    let next_disabled = Signal::derive(move || state.with(|s| !s.can_go_next()));

    let invoice_row = move |invoice: Invoice| {
        let amount = format_amount(invoice.subtotal, invoice.currency_code());
        let date = format_epoch_seconds(invoice.period_end);
        let number = invoice.number.clone().unwrap_or_else(|| "-".to_string());
        let id = invoice.id.clone();
        view! {
            <TableRow>
                <TableCell>{icon("file-text")}</TableCell>
                <TableCell>{date}</TableCell>
                <TableCell>{amount}</TableCell>
                <TableCell>{number}</TableCell>
                <TableCell>
                    <div style="display: flex; justify-content: flex-end;">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| download(id.clone())
                        >
                            {icon("download")}
                        </Button>
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="page" id="a025_stripe_invoice--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Invoices"</h1>
                    <Badge>{move || state.with(|s| s.pagination.total_count.to_string())}</Badge>
                </div>
            </div>

            <div class="page__content" style="position: relative;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 48px;">""</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Amount due"</TableHeaderCell>
                            <TableHeaderCell>"Invoice number"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 80px;">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let (invoices, message, summary) = state.with(|s| {
                                if s.invoices.is_empty() {
                                    (Vec::new(), s.placeholder().unwrap_or_default(), String::new())
                                } else {
                                    (s.invoices.clone(), "", s.summary())
                                }
                            });
                            if invoices.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5" attr:style="padding: 48px 12px; text-align: center; color: var(--colorNeutralForeground3);">
                                            {message}
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            view! {
                                {invoices.into_iter().map(invoice_row).collect_view()}
                                <TableRow>
                                    <TableCell attr:colspan="5">
                                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                            <span style="font-size: 0.9em; opacity: 0.6;">{summary}</span>
                                            <Space>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=prev_disabled
                                                    on_click=move |_| {
                                                        let page = state.with_untracked(|s| s.pagination.page);
                                                        go_to_page(page.saturating_sub(1));
                                                    }
                                                >
                                                    {icon("chevron-left")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=next_disabled
                                                    on_click=move |_| {
                                                        let page = state.with_untracked(|s| s.pagination.page);
                                                        go_to_page(page + 1);
                                                    }
                                                >
                                                    {icon("chevron-right")}
                                                </Button>
                                            </Space>
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any()
                        }}
                    </TableBody>
                </Table>

                <Show when=move || loading.get()>
                    <div class="loading-overlay">
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            {move || state.with(|s| !s.invoices.is_empty()).then_some(CHECKING_FOR_INVOICES)}
                        </Flex>
                    </div>
                </Show>
            </div>
        </div>
    }
}
