//! Static page content: the for-sale ledger and the FAQ. None of this is
//! user-editable; it only feeds the templates.

pub struct DomainListing {
    pub name: &'static str,
    pub price: &'static str,
    pub tier: &'static str,
    pub link: &'static str,
}

pub const PORTFOLIO: [DomainListing; 4] = [
    DomainListing {
        name: "biginterview.ai",
        price: "$649",
        tier: "Exclusive",
        link: "https://www.godaddy.com/domainsearch/find?domainToCheck=biginterview.ai",
    },
    DomainListing {
        name: "biginterview.co",
        price: "$249",
        tier: "Premium+",
        link: "https://www.godaddy.com/domainsearch/find?domainToCheck=biginterview.co",
    },
    DomainListing {
        name: "biginterview.app",
        price: "$149",
        tier: "Premium",
        link: "https://www.godaddy.com/domainsearch/find?domainToCheck=biginterview.app",
    },
    DomainListing {
        name: "biginterview.info",
        price: "$49",
        tier: "Premium",
        link: "http://godaddy.com/domainsearch/find?domainToCheck=biginterview.info",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "1. What assets are included in this sale?",
        answer: "The sale includes the premium domain 'biginterview.ai', along with the \
                 supporting portfolio: 'biginterview.co', 'biginterview.app', and \
                 'biginterview.info'. This bundle ensures complete brand protection and \
                 digital territory control.",
    },
    FaqEntry {
        question: "2. How does the transfer process work?",
        answer: "We use Afternic (a GoDaddy brand) as our secure escrow partner. Once \
                 payment is verified, we unlock the domains and provide you with the \
                 authorization codes (EPP codes) to transfer them to your preferred \
                 registrar (e.g., GoDaddy, Namecheap, Google Domains).",
    },
    FaqEntry {
        question: "3. Is the transaction secure?",
        answer: "Yes. All transactions are handled through a licensed third-party escrow \
                 service. We do not receive funds until you have confirmed full control \
                 and ownership of the domains. This guarantees safety for both buyer and \
                 seller.",
    },
    FaqEntry {
        question: "4. Can I buy just one domain?",
        answer: "Our priority is to sell the complete portfolio to a single entity to \
                 maintain brand integrity. However, we are open to discussing individual \
                 offers for the premium .ai domain. Please contact us for specific \
                 inquiries.",
    },
    FaqEntry {
        question: "5. How long does the transfer take?",
        answer: "Typically, transfers are completed within 1 to 5 business days, depending \
                 on the receiving registrar. Our team provides 24/7 support to expedite \
                 this process and ensure a smooth transition.",
    },
    FaqEntry {
        question: "6. Are there any hidden fees?",
        answer: "No. The listed price is the final acquisition cost. Once transferred, you \
                 will only be responsible for standard annual renewal fees with your \
                 registrar. For further questions, please use our contact portal.",
    },
];
