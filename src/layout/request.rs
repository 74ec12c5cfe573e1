/// Handle for one dispatched layout computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LayoutTicket(u64);

/// Tracks dispatched layout computations so only the latest result is shown.
#[derive(Clone, Debug, Default)]
pub struct LayoutRequests {
	latest: u64,
}

impl LayoutRequests {
	/// Starts a new request, superseding every earlier one.
	pub fn issue(&mut self) -> LayoutTicket {
		self.latest += 1;
		LayoutTicket(self.latest)
	}

	/// Whether a result for `ticket` should replace the displayed layout.
	pub fn accept(&self, ticket: LayoutTicket) -> bool {
		ticket.0 == self.latest
	}
}
