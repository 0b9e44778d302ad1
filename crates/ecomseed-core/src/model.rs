//! # Entity Model
//!
//! The five generated entity types. Root entities (`Customer`, `Product`)
//! carry no references to other generated data; dependent entities (`Order`,
//! `OrderItem`, `Payment`) hold foreign keys into collections generated
//! before them.
//!
//! Fields drawn from static pools are held as `&'static str` borrows, the
//! same zero-allocation trick the output layer uses for its `Value` strings.
//!
//! `Order` uses two-phase construction: order generation yields an
//! [`OrderDraft`] with no total, and item generation consumes the draft via
//! [`OrderDraft::finalize`] once the line items are known. There is no other
//! way to obtain an `Order`, so the "total is written exactly once" rule is
//! enforced by the type system instead of by convention.

use chrono::NaiveDate;

/// Round a currency amount to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: u32,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub phone: String,
    pub city: &'static str,
    pub state: &'static str,
    pub signup_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: u32,
    pub product_name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub stock_qty: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

/// An order before its total is known. Everything except `total_amount` is
/// fixed at creation; `finalize` is consumed by value so a draft can be
/// finalized at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_id: u32,
    pub customer_id: u32,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub shipping_city: &'static str,
}

impl OrderDraft {
    /// Seal the draft with the accumulated line-item total (rounded to
    /// cents). The single mutation an order ever undergoes.
    pub fn finalize(self, total_amount: f64) -> Order {
        Order {
            order_id: self.order_id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            status: self.status,
            total_amount: round2(total_amount),
            shipping_city: self.shipping_city,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: u32,
    pub customer_id: u32,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub shipping_city: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_item_id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    /// Snapshot of the product price at generation time, not a live
    /// reference.
    pub unit_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Paypal,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::ApplePay => "apple_pay",
            PaymentMethod::GooglePay => "google_pay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Pending,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 2] = [PaymentStatus::Completed, PaymentStatus::Pending];

    /// Observed settlement split: most payments clear immediately.
    pub const WEIGHTS: [f64; 2] = [0.8, 0.2];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: u32,
    pub order_id: u32,
    pub payment_date: NaiveDate,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(15.004), 15.0);
        assert_eq!(round2(15.005), 15.01);
        assert_eq!(round2(999.99 * 3.0), 2999.97);
    }

    #[test]
    fn test_finalize_rounds_total() {
        let draft = OrderDraft {
            order_id: 5001,
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            status: OrderStatus::Shipped,
            shipping_city: "Seattle",
        };
        let order = draft.finalize(129.99 + 129.99 + 129.99);
        assert_eq!(order.total_amount, 389.97);
        assert_eq!(order.order_id, 5001);
        assert_eq!(order.shipping_city, "Seattle");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Processing.as_str(), "processing");
        assert_eq!(PaymentMethod::ApplePay.as_str(), "apple_pay");
        assert_eq!(PaymentStatus::Pending.as_str(), "pending");
    }
}
