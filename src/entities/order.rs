use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ValidationError;
use crate::utils::round_money;

pub const TAX_RATE: Decimal = dec!(0.08);
pub const SHIPPING_FEE: Decimal = dec!(15.00);
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(100);

#[derive(Debug, Display, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[display("pending")]
    Pending,
    #[display("processing")]
    Processing,
    #[display("shipped")]
    Shipped,
    #[display("delivered")]
    Delivered,
    #[display("cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Case-insensitive comparison against a status name, e.g. `"Pending"`.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl OrderItem {
    /// Builds a line with `total_price = quantity * unit_price`.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<Self, ValidationError> {
        let total_price = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or(ValidationError::AmountTooLarge)?;
        let item = Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
            total_price: round_money(total_price),
        };
        item.validate()?;
        Ok(item)
    }

    /// Field constraints only. `total_price` is taken as given and not
    /// cross-checked against `quantity * unit_price`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id.is_empty() {
            return Err(ValidationError::EmptyField { field: "product_id" });
        }
        if self.product_name.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "product_name",
            });
        }
        if self.quantity < 1 {
            return Err(ValidationError::InvalidQuantity(self.quantity));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "unit_price",
            });
        }
        if self.total_price < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "total_price",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total_amount: Decimal,
}

impl Totals {
    /// Fails with [`ValidationError::AmountTooLarge`] when any sum leaves
    /// the range of `Decimal`.
    pub fn try_for_items(items: &[OrderItem]) -> Result<Self, ValidationError> {
        let subtotal = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.total_price))
            .map(round_money)
            .ok_or(ValidationError::AmountTooLarge)?;
        let tax = subtotal
            .checked_mul(TAX_RATE)
            .map(round_money)
            .ok_or(ValidationError::AmountTooLarge)?;
        let shipping_cost = if subtotal < FREE_SHIPPING_THRESHOLD {
            SHIPPING_FEE
        } else {
            dec!(0.00)
        };
        let total_amount = subtotal
            .checked_add(tax)
            .and_then(|t| t.checked_add(shipping_cost))
            .map(round_money)
            .ok_or(ValidationError::AmountTooLarge)?;
        Ok(Self {
            subtotal,
            tax,
            shipping_cost,
            total_amount,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub shipping_address: String,
    pub notes: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    pub notes: Option<String>,
}

impl NewOrder {
    /// Checks every item and returns the totals the order will carry.
    pub fn validate(&self) -> Result<Totals, ValidationError> {
        self.items.iter().try_for_each(OrderItem::validate)?;
        Totals::try_for_items(&self.items)
    }
}

/// Partial update. `None` means the field was not sent; for `notes`,
/// `Some(None)` means it was sent as `null` and clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

impl OrderUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.shipping_address.is_none() && self.notes.is_none()
    }
}

impl Order {
    pub fn new(
        order_id: String,
        new: NewOrder,
        totals: Totals,
        order_date: DateTime<Utc>,
        status: OrderStatus,
    ) -> Self {
        Self {
            order_id,
            customer_id: new.customer_id,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            order_date,
            status,
            items: new.items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping_cost: totals.shipping_cost,
            total_amount: totals.total_amount,
            shipping_address: new.shipping_address,
            notes: new.notes,
        }
    }

    /// Returns a copy with every field present in `update` overwritten.
    pub fn patched(&self, update: &OrderUpdate) -> Self {
        let mut next = self.clone();
        if let Some(status) = update.status {
            next.status = status;
        }
        if let Some(addr) = &update.shipping_address {
            next.shipping_address = addr.clone();
        }
        if let Some(notes) = &update.notes {
            next.notes = notes.clone();
        }
        next
    }
}
