pub mod cash_request;
pub mod invoice;
pub mod it_ticket;
pub mod leave_request;
pub mod purchase_requisition;
pub mod rfq;
