//! Table row shapes and their conversion into domain entities.

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::domain::entities::{CreditCard, Customer};

/// A row of the `customer` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A row of the `creditcard` table.
#[derive(Debug, Clone, FromRow)]
pub struct CreditCardRow {
    pub card_id: i64,
    pub customer_id: i64,
    pub card_number: String,
    pub expiration_date: NaiveDate,
    pub cvv: String,
    pub card_type: String,
    pub credit_limit: f64,
    pub current_balance: f64,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(row.customer_id, row.first_name, row.last_name, row.email)
    }
}

impl From<CreditCardRow> for CreditCard {
    fn from(row: CreditCardRow) -> Self {
        CreditCard {
            id: row.card_id,
            customer_id: row.customer_id,
            card_number: row.card_number,
            expiration_date: row.expiration_date,
            cvv: row.cvv,
            card_type: row.card_type,
            credit_limit: row.credit_limit,
            current_balance: row.current_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card_row_conversion() {
        let row = CreditCardRow {
            card_id: 10,
            customer_id: 4,
            card_number: "1234567890123456".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            cvv: "123".to_string(),
            card_type: "Credit".to_string(),
            credit_limit: 5000.0,
            current_balance: 1000.0,
        };

        let card = CreditCard::from(row);

        assert_eq!(card.id, 10);
        assert_eq!(card.customer_id, 4);
        assert_eq!(card.card_number, "1234567890123456");
        assert_eq!(card.credit_limit, 5000.0);
    }

    #[test]
    fn test_customer_row_conversion_has_no_cards() {
        let row = CustomerRow {
            customer_id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        };

        let customer = Customer::from(row);

        assert_eq!(customer.id, 1);
        assert_eq!(customer.email, "john.doe@example.com");
        assert!(customer.credit_cards.is_empty());
    }
}
