mod menu_item_routes;
