/// Counters shown on the dashboard landing page.
pub struct DashboardData {
    pub category_total: usize,
    pub customer_total: usize,
    pub product_total: usize,
}
