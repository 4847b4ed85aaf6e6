use restaurant_orders::item::Item;
use restaurant_orders::menu::Menu;
use restaurant_orders::telemetry::setup_tracing;
use rust_decimal::Decimal;

/// Many menus race to list the same item; exactly one may win.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_menus_compete_for_item() {
    setup_tracing();

    let item = Item::food("Special", Decimal::new(1200, 2)).unwrap();
    let menus: Vec<Menu> = (0..16).map(|_| Menu::new()).collect();

    let mut handles = vec![];
    for menu in menus.iter().cloned() {
        let item = item.clone();
        handles.push(tokio::spawn(async move { menu.add_item(&item) }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }

    assert_eq!(successful, 1, "Expected exactly one menu to list the item");

    let owners: Vec<&Menu> = menus.iter().filter(|menu| menu.contains(&item)).collect();
    assert_eq!(owners.len(), 1);
    assert_eq!(item.menu_id(), Some(owners[0].id()));
}

/// Adding and removing from separate tasks keeps menu and item in agreement.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_add_remove_stays_consistent() {
    let menu = Menu::new();
    let items: Vec<_> = (0..50)
        .map(|i| Item::drink(format!("Drink {i}"), Decimal::new(i, 0)).unwrap())
        .collect();

    let mut handles = vec![];
    for item in items.iter().cloned() {
        let menu = menu.clone();
        handles.push(tokio::spawn(async move {
            menu.add_item(&item).unwrap();
            if item.price() >= Decimal::new(25, 0) {
                menu.remove_item(&item).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(menu.len(), 25);
    for item in &items {
        assert_eq!(menu.contains(item), item.is_assigned());
    }
}
