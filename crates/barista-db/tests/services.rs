//! Order Service, Consumption Analyzer and Menu Service running on SQLite.

use barista_core::{
    ConsumptionAnalyzer, CoreError, MenuService, NewCoffee, OrderRequest, OrderService,
    OrderStatus,
};
use barista_db::{Database, DbConfig};
use chrono::{Duration, Utc};

struct Shop {
    db: Database,
    expresso: i64,
    cappuccino: i64,
    flat_white: i64,
}

async fn shop() -> Shop {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let menu = MenuService::new(db.clone());

    let mut ids = Vec::new();
    for (name, price_cents, water_ml, milk_ml, coffee_grounds_g) in [
        ("Expresso", 200, 50, 0, 15),
        ("Cappuccino", 450, 30, 120, 15),
        ("Flat White", 550, 30, 150, 15),
    ] {
        let coffee = menu
            .create_coffee(&NewCoffee {
                name: name.to_string(),
                price_cents,
                water_ml,
                milk_ml,
                coffee_grounds_g,
            })
            .await
            .unwrap();
        ids.push(coffee.id);
    }

    Shop {
        db,
        expresso: ids[0],
        cappuccino: ids[1],
        flat_white: ids[2],
    }
}

async fn backdate(db: &Database, order_id: i64, age: Duration) {
    sqlx::query("UPDATE orders SET created_at = ?1 WHERE id = ?2")
        .bind(Utc::now() - age)
        .bind(order_id)
        .execute(db.pool())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_order_round_trips_through_sqlite() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());

    let created = orders
        .create_order(&OrderRequest::new([(shop.expresso, 2), (shop.cappuccino, 1)]))
        .await
        .unwrap();

    assert_eq!(created.total_price, 8.5);
    assert_eq!(created.items[0].item_price, 4.0);
    assert_eq!(created.items[1].item_price, 4.5);

    let found = orders.order_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_unknown_coffee_leaves_no_order() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());

    let err = orders
        .create_order(&OrderRequest::new([(shop.expresso, 1), (99999, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::UnknownCoffee(99999)));
    assert_eq!(shop.db.orders().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_pending_excludes_completed() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());

    let first = orders
        .create_order(&OrderRequest::new([(shop.flat_white, 1)]))
        .await
        .unwrap();
    let second = orders
        .create_order(&OrderRequest::new([(shop.expresso, 3)]))
        .await
        .unwrap();
    sqlx::query("UPDATE orders SET status = 'completed' WHERE id = ?1")
        .bind(first.id)
        .execute(shop.db.pool())
        .await
        .unwrap();

    let pending = orders.pending_orders().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);
    assert!(pending.iter().all(|o| o.status == OrderStatus::Pending));
}

#[tokio::test]
async fn test_stored_total_is_not_recomputed() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());

    let created = orders
        .create_order(&OrderRequest::new([(shop.cappuccino, 2)]))
        .await
        .unwrap();
    sqlx::query("UPDATE coffees SET price_cents = 999 WHERE id = ?1")
        .bind(shop.cappuccino)
        .execute(shop.db.pool())
        .await
        .unwrap();

    let found = orders.order_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.total_price, 9.0);
}

#[tokio::test]
async fn test_consumption_scenario() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());
    let analyzer = ConsumptionAnalyzer::new(shop.db.clone());

    orders
        .create_order(&OrderRequest::new([(shop.expresso, 2), (shop.cappuccino, 1)]))
        .await
        .unwrap();

    let report = analyzer.analyze(1).await.unwrap();
    assert_eq!(report.period_days, 1);
    assert_eq!(report.total_coffees, 3);
    assert_eq!(report.total_water_ml, 130);
    assert_eq!(report.total_milk_ml, 120);
    assert_eq!(report.total_coffee_grounds_g, 45);
    assert_eq!(report.daily_averages.coffees, 3.0);
}

#[tokio::test]
async fn test_consumption_window() {
    let shop = shop().await;
    let orders = OrderService::new(shop.db.clone());
    let analyzer = ConsumptionAnalyzer::new(shop.db.clone());

    let old = orders
        .create_order(&OrderRequest::new([(shop.flat_white, 4)]))
        .await
        .unwrap();
    backdate(&shop.db, old.id, Duration::days(3)).await;
    orders
        .create_order(&OrderRequest::new([(shop.flat_white, 1)]))
        .await
        .unwrap();

    let daily = analyzer.analyze(1).await.unwrap();
    assert_eq!(daily.total_coffees, 1);
    assert_eq!(daily.total_milk_ml, 150);

    let weekly = analyzer.analyze(7).await.unwrap();
    assert_eq!(weekly.total_coffees, 5);
    assert_eq!(weekly.total_milk_ml, 750);
    assert_eq!(weekly.daily_averages.milk_ml, 750.0 / 7.0);
}

#[tokio::test]
async fn test_consumption_empty_and_invalid() {
    let shop = shop().await;
    let analyzer = ConsumptionAnalyzer::new(shop.db.clone());

    let report = analyzer.analyze(30).await.unwrap();
    assert_eq!(report.total_coffees, 0);
    assert_eq!(report.daily_averages.coffee_grounds_g, 0.0);

    assert!(matches!(
        analyzer.analyze(0).await,
        Err(CoreError::Validation(_))
    ));
}

#[tokio::test]
async fn test_menu_prices_agree_with_admin_listing() {
    let shop = shop().await;
    let menu = MenuService::new(shop.db.clone());

    let display = menu.menu().await.unwrap();
    let admin = menu.catalog().await.unwrap();

    assert_eq!(display.len(), 3);
    for (item, coffee) in display.iter().zip(&admin) {
        assert_eq!((item.price * 100.0).round() as i64, coffee.price_cents);
    }
}

#[tokio::test]
async fn test_coffee_referenced_by_order_cannot_be_deleted() {
    let shop = shop().await;
    OrderService::new(shop.db.clone())
        .create_order(&OrderRequest::new([(shop.expresso, 1)]))
        .await
        .unwrap();

    let result = sqlx::query("DELETE FROM coffees WHERE id = ?1")
        .bind(shop.expresso)
        .execute(shop.db.pool())
        .await;
    assert!(result.is_err());
}
