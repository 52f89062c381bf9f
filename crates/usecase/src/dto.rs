use simple_ls_domain::Listing;
use simple_ls_shared_kernel::InfrastructureError;

/// Result of one listing run: what to print, and which entries could not be
/// resolved and were left out.
#[derive(Debug)]
pub struct ListingOutput {
    pub listing: Listing,
    pub skipped: Vec<InfrastructureError>,
}

impl ListingOutput {
    /// True when every visible entry made it into the listing.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
