//! Reply templates.
//!
//! Everything here is plain text composition. The listing produced by
//! [`render_listing`] is read back by the context analyzer on the next turn,
//! so its `I found N products for "<query>"` header and `🔹 **<name>**`
//! bullets must stay byte-stable.

use shopbot_catalog::ProductRecord;

use crate::types::ConversationContext;

// =============================================================================
// Product listing and keyword fallback
// =============================================================================

/// Render catalog results as a product listing.
///
/// `products` must be non-empty; the follow-up prompts name the first one.
pub fn render_listing(query: &str, products: &[ProductRecord]) -> String {
    let items: Vec<String> = products.iter().map(render_product).collect();
    let first = products.first().map(|p| p.name.as_str()).unwrap_or_default();

    format!(
        "I found {count} products for \"{query}\":\n\n{items}\n\n\
         Would you like more details about any of these products? You can ask:\n\
         • \"Tell me more about the {first}\"\n\
         • \"Compare the first two options\"\n\
         • \"What are the specs of the {first}?\"\n\
         • \"Show me similar products\"",
        count = products.len(),
        items = items.join("\n"),
    )
}

fn render_product(product: &ProductRecord) -> String {
    let stock = if product.in_stock {
        "✅ In Stock"
    } else {
        "❌ Out of Stock"
    };
    format!(
        "🔹 **{}** by {}\n   💰 ${}\n   📝 {}\n   {}\n",
        product.name, product.brand, product.price, product.description, stock
    )
}

/// Keyword-driven suggestion used when a search yields nothing or fails.
pub fn fallback_for_query(query: &str) -> String {
    let lower = query.to_lowercase();

    if lower.contains("laptop") || lower.contains("computer") {
        return LAPTOP_FALLBACK.to_string();
    }

    if lower.contains("phone") || lower.contains("iphone") || lower.contains("samsung") {
        return PHONE_FALLBACK.to_string();
    }

    format!(
        "I couldn't find specific products for \"{query}\", but I'm here to help! Here are our main categories:\n\n\
         🔹 **Electronics**: Laptops, phones, tablets, headphones\n\
         🔹 **Gaming**: Consoles, games, accessories\n\
         🔹 **Accessories**: Cases, chargers, cables\n\
         🔹 **Home & Garden**: Appliances, smart home devices\n\n\
         Try searching for specific products like \"iPhone\", \"laptop\", \"headphones\", or browse by category!"
    )
}

pub const LAPTOP_FALLBACK: &str = "I'd be happy to help you find the perfect laptop! Here are some suggestions:\n\n\
    🔹 **Budget laptops** ($500-800): Great for students and basic tasks\n\
    🔹 **Mid-range laptops** ($800-1200): Perfect for work and light gaming\n\
    🔹 **Premium laptops** ($1200+): High-performance for professionals\n\n\
    Try searching for specific brands like \"Dell\", \"HP\", \"Apple MacBook\", or \"Lenovo\" to see our available options!";

pub const PHONE_FALLBACK: &str = "Looking for a new phone? Here's what we offer:\n\n\
    🔹 **iPhone models**: Latest Apple smartphones with iOS\n\
    🔹 **Samsung Galaxy**: Premium Android phones with great cameras\n\
    🔹 **Budget phones**: Affordable options under $300\n\n\
    Try searching for \"iPhone\", \"Samsung Galaxy\", or \"phone under $500\" to see our selection!";

// =============================================================================
// Follow-ups
// =============================================================================

pub fn followup_affirmative(context: &ConversationContext) -> String {
    if !context.has_products {
        return "I'd be happy to help! What specific product are you interested in?".to_string();
    }

    let query = non_empty_or(&context.last_product_query, "products");
    let first = context.last_products.first().map(String::as_str);
    let second = context.last_products.get(1).map(String::as_str);

    format!(
        "Great! I'd be happy to provide more details about those {query}. Here's what I can help you with:

🔹 **Detailed Specifications**: Technical specs and features
🔹 **Price Comparisons**: Compare with similar products
🔹 **Customer Reviews**: What other customers are saying
🔹 **Alternatives**: Similar products you might like
🔹 **Availability**: Stock status and delivery options

Which product interests you most? You can ask:
• \"Tell me more about the {tell}\"
• \"Compare the {compare_a} and {compare_b}\"
• \"What are the specs of the {specs}?\"
• \"Show me similar products\"",
        tell = first.unwrap_or("first one"),
        compare_a = first.unwrap_or("first one"),
        compare_b = second.unwrap_or("second one"),
        specs = first.unwrap_or("Dell XPS 13"),
    )
}

pub const FOLLOWUP_NEGATIVE: &str = "No problem! Let me help you find something better. Could you tell me:

🔹 **What specifically are you looking for?** (brand, features, etc.)
🔹 **What's your budget range?**
🔹 **What will you use it for?** (work, gaming, school, etc.)
🔹 **Any specific requirements?** (size, performance, etc.)

Or try a different search like:
• \"Show me gaming laptops under $1500\"
• \"I need a laptop for video editing\"
• \"Budget phones with good cameras\"
• \"Best headphones for music\"";

pub fn followup_more_info(context: &ConversationContext) -> String {
    let products = &context.last_products;
    let Some(first) = products.first() else {
        return "What specific information would you like to know more about?".to_string();
    };

    format!(
        "I'd be happy to provide more details! Which product would you like to know more about?

{list}

You can ask:
• \"Tell me about the {first}\"
• \"What are the specs of option {option}?\"
• \"Compare options 1 and 2\"
• \"Show me reviews for the {first}\"",
        list = numbered(products),
        option = products.len().min(2),
    )
}

pub const FOLLOWUP_CLARIFICATION: &str = "Could you clarify what you'd like to know? I'm here to help with product information, comparisons, and recommendations!";

// =============================================================================
// Comparisons
// =============================================================================

/// Offer to compare products from the previous listing (at least two).
pub fn comparison_offer(products: &[String]) -> String {
    let shown = &products[..products.len().min(3)];
    let first = products.first().map(String::as_str).unwrap_or_default();
    let second = products.get(1).map(String::as_str).unwrap_or_default();

    format!(
        "I can help you compare products! From your previous search, I can compare:

{list}

Here's what I can compare for you:
🔹 **Price & Value**: Which offers the best bang for your buck
🔹 **Performance**: Processing power, speed, capabilities
🔹 **Features**: What's included and what's different
🔹 **User Reviews**: What customers prefer
🔹 **Use Cases**: Which is better for your specific needs

Which products would you like me to compare? You can say:
• \"Compare the {first} and {second}\"
• \"What's the difference between options 1 and 2?\"
• \"Which is better for gaming/work/students?\"",
        list = numbered(shown),
    )
}

/// Combine two search replies into one side-by-side answer.
pub fn comparison_results(first: &str, second: &str, first_reply: &str, second_reply: &str) -> String {
    format!(
        "I'll help you compare {first} and {second}!

**{first} Results:**
{first_reply}

**{second} Results:**
{second_reply}

Would you like me to provide a detailed comparison of specific models from these results?"
    )
}

pub const COMPARISON_CLARIFICATION: &str = "I'd be happy to help you compare products! To give you the best comparison, could you tell me:

🔹 **Which specific products** you want to compare?
🔹 **What aspects** are most important to you? (price, performance, features)
🔹 **What will you use it for?** (work, gaming, general use)

For example, you could ask:
• \"Compare iPhone 15 Pro and Samsung Galaxy S24\"
• \"Dell XPS 13 vs MacBook Air\"
• \"Best gaming laptop under $1500 vs $2000\"
• \"Which is better for video editing?\"";

// =============================================================================
// Specific products
// =============================================================================

pub fn price_inquiry(product: &str) -> String {
    format!(
        "Let me check the price for the {product}...

I'll search for current pricing and availability. You can also ask:
• \"Is the {product} on sale?\"
• \"Compare {product} prices with similar products\"
• \"Show me {product} deals and discounts\""
    )
}

pub fn specs_inquiry(product: &str) -> String {
    format!(
        "I'll get you the detailed specifications for the {product}:

🔹 **Technical Specs**: Processor, RAM, storage, display
🔹 **Performance**: Benchmarks and real-world performance
🔹 **Features**: What's included and special capabilities
🔹 **Connectivity**: Ports, wireless, compatibility
🔹 **Physical**: Dimensions, weight, build quality

Would you like me to focus on any specific aspect of the specs?"
    )
}

pub const PRODUCT_CLARIFICATION: &str = "I'd be happy to provide product details! Which specific product are you interested in?

You can ask about:
🔹 **Specifications**: \"What are the specs of the Dell XPS 13?\"
🔹 **Pricing**: \"How much is the iPhone 15 Pro?\"
🔹 **Features**: \"Tell me about the MacBook Air features\"
🔹 **Reviews**: \"What do customers say about the Sony headphones?\"

What product would you like to know more about?";

// =============================================================================
// Recommendations
// =============================================================================

pub const GIFT_RECOMMENDATION: &str = "I'd love to help you find the perfect gift! To give you the best recommendations, tell me:

🔹 **Who is it for?** (tech enthusiast, student, gamer, professional, etc.)
🔹 **What's your budget?** (under $100, $100-500, $500+)
🔹 **What are they interested in?** (gaming, music, work, fitness, etc.)
🔹 **Any specific preferences?** (brand, size, color)

Popular gift categories:
• **Tech Gifts**: Headphones, smartwatches, tablets ($50-500)
• **Gaming**: Consoles, accessories, games ($60-500)
• **Professional**: Laptops, monitors, accessories ($200-2000)
• **Audio**: Speakers, headphones, earbuds ($30-400)

What type of person are you shopping for?";

pub const BEST_PRODUCT: &str = "I can help you find the best products! What category are you looking for?

🔹 **Best Laptops**: For work, gaming, students, or professionals
🔹 **Best Phones**: Latest models, budget options, or specific features
🔹 **Best Headphones**: Music, gaming, noise-canceling, or budget
🔹 **Best Gaming**: Consoles, accessories, or gaming laptops
🔹 **Best Value**: Great products at affordable prices

You can ask:
• \"What's the best laptop under $1000?\"
• \"Best phone for photography\"
• \"Best gaming headphones\"
• \"Best value tablets for students\"";

// =============================================================================
// Availability
// =============================================================================

/// Appended to a product search when the user asked about stock.
pub const AVAILABILITY_HELP: &str = "\n\nFor specific delivery times and shipping options, I can help you with:\n\
    🔹 **Stock Status**: Real-time availability\n\
    🔹 **Delivery Options**: Standard, express, same-day\n\
    🔹 **Store Pickup**: Check local store availability";

pub const AVAILABILITY_CLARIFICATION: &str = "I can check availability for any product! Just tell me what you're looking for:

🔹 **Specific Product**: \"Is the iPhone 15 Pro in stock?\"
🔹 **Category**: \"Do you have gaming laptops available?\"
🔹 **Brand**: \"What Dell products are in stock?\"

I can also help with:
• Delivery timeframes
• Store pickup options
• Restock notifications
• Alternative products if something is out of stock

What product would you like me to check?";

// =============================================================================
// Small talk
// =============================================================================

pub const GREETING: &str = "Hello! 👋 Welcome to ShopBot! I'm your AI shopping assistant, and I'm excited to help you find exactly what you're looking for.

I can help you with:
🔹 **Product Search**: Find specific items by name, brand, or category
🔹 **Recommendations**: Get personalized suggestions based on your needs
🔹 **Comparisons**: Compare different products and features
🔹 **Detailed Information**: Specs, reviews, pricing, and availability
🔹 **Shopping Guidance**: Budget advice, gift ideas, and more

What can I help you find today? Try asking:
• \"Show me laptops under $1000\"
• \"I need headphones for gaming\"
• \"What's the best phone for photography?\"
• \"Compare iPhone and Samsung phones\"";

pub const HELP: &str = "I'm here to help you shop smarter! Here's what I can do:

🔹 **Search Products**: \"Show me gaming laptops\" or \"Find wireless headphones\"
🔹 **Get Recommendations**: \"Best laptop for students\" or \"Gift ideas under $200\"
🔹 **Compare Products**: \"iPhone vs Samsung\" or \"Compare these laptops\"
🔹 **Product Details**: \"Tell me about the Dell XPS 13\" or \"MacBook Air specs\"
🔹 **Check Availability**: \"Is the PlayStation 5 in stock?\"
🔹 **Price Information**: \"How much is the iPhone 15?\" or \"Budget options\"

Just ask me naturally! I understand questions like:
• \"I need a laptop for video editing under $1500\"
• \"What's the difference between these headphones?\"
• \"Show me the best gaming consoles\"
• \"I'm looking for a gift for a tech lover\"

What would you like to explore?";

pub const CLOSING: &str = concat!(
    "Thank you for using ShopBot! 😊 \n",
    "\n",
    "I hope I was able to help you find what you were looking for. If you need any more assistance with:\n",
    "🔹 Product recommendations\n",
    "🔹 Price comparisons  \n",
    "🔹 Technical specifications\n",
    "🔹 Availability checks\n",
    "\n",
    "Just ask! I'm always here to help you make the best shopping decisions.\n",
    "\n",
    "Happy shopping! 🛍️",
);

pub const GENERAL_INQUIRY: &str = "I'm here to help you with all your shopping needs! Whether you're looking for:

🔹 **Electronics**: Laptops, phones, tablets, headphones
🔹 **Gaming**: Consoles, accessories, gaming gear
🔹 **Home & Office**: Appliances, furniture, supplies
🔹 **Gifts**: Perfect presents for any occasion

Just tell me what you're looking for, and I'll help you find the best options!

What can I help you shop for today?";

// =============================================================================
// Helpers
// =============================================================================

fn numbered(products: &[String]) -> String {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. **{}**", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
