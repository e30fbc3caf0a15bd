//! The full purchase scenario: register, add to cart, checkout, pay.

#![cfg(feature = "browser")]

use cartwright::{Presence, TestDataFactory, TestHarness};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires headless chromium and the live storefront"]
async fn registered_user_completes_checkout_with_payment() {
    let mut harness = TestHarness::launch_from_env().await.unwrap();
    let profile = TestDataFactory::usa();
    let card = TestDataFactory::payment();

    // Register John Smith with the USA address
    let login = harness.login_page();
    let registration = harness.registration_page();
    login.navigate(harness.page_mut()).await.unwrap();
    login
        .signup(harness.page(), &profile.name, &profile.email)
        .await
        .unwrap();
    registration
        .fill_account_info(harness.page(), profile.title, &profile.password, &profile.dob)
        .await
        .unwrap();
    registration
        .fill_address_info(harness.page(), &profile.address)
        .await
        .unwrap();
    registration
        .submit_registration(harness.page())
        .await
        .unwrap();
    assert_eq!(
        registration.account_created(harness.page()).await,
        Presence::Present,
        "registration did not confirm"
    );
    registration
        .continue_after_registration(harness.page())
        .await
        .unwrap();

    // Add the product and head to checkout
    let products = harness.products_page();
    products.navigate(harness.page()).await.unwrap();
    products
        .add_product_by_name(harness.page(), "Fancy Green Top", false)
        .await
        .unwrap();
    products.go_to_cart(harness.page()).await.unwrap();

    let cart = harness.cart_page();
    let rows = cart.get_products(harness.page()).await.unwrap();
    assert!(
        rows.iter().any(|p| p.name == "Fancy Green Top"),
        "Fancy Green Top missing from the cart"
    );
    cart.proceed_to_checkout(harness.page()).await.unwrap();

    // Comment, place order, pay
    let checkout = harness.checkout_page();
    checkout
        .add_comment(harness.page(), "Please deliver between 9am and 5pm.")
        .await
        .unwrap();
    checkout.place_order(harness.page()).await.unwrap();

    let payment = harness.payment_page();
    payment
        .fill_payment_details(harness.page(), &card)
        .await
        .unwrap();
    payment.confirm_payment(harness.page()).await.unwrap();

    assert_eq!(
        payment.verify_success(harness.page()).await,
        Presence::Present,
        "no congratulations message after payment"
    );

    harness.close().await.unwrap();
}
