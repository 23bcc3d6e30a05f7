pub const SUBMISSION_ENDPOINT: &str = "https://appslabs.store/db/pushdata.php";

// Tag sent as `req_url` so the collector can tell which site a demo request came from.
pub const REQUEST_ORIGIN: &str = "adpocket.ai";

pub const CONTACT_SOURCE: &str = "contact_modal";
pub const DEMO_SOURCE: &str = "request_demo";

// Gap between the contact modal closing and the success modal appearing.
pub const SUCCESS_REVEAL_DELAY_MS: u32 = 300;

pub const DEMO_AUTO_CLOSE_MS: u32 = 3_000;

pub fn get_submission_endpoint() -> &'static str {
    SUBMISSION_ENDPOINT
}
