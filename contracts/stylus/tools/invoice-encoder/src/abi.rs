//! Solidity ABI of the forwarder and of the multi-token collection it relays to.

use alloy_sol_types::sol;

sol! {
    /// ABI shape of a relay invoice.
    struct Invoice {
        address sender;
        address target;
        uint256 value;
        uint256 kind;
        bytes payload;
    }

    interface IForwarder {
        function owner() external view returns (address owner);
        function isWhitelist(address account) external view returns (bool whitelisted);
        function addWhitelist(address account) external;
        function executeCall(Invoice invoice) external payable returns (bytes result);
    }

    interface ICollection {
        function _mint(address to, string collection, string uri, uint256 amount, string uuid)
            external
            returns (uint256 id);
        function safeTransferFrom(address from, address to, uint256 id, uint256 amount, bytes data)
            external;
        function getSupply(uint256 id) external view returns (uint256 supply);
        function balanceOf(address account, uint256 id) external view returns (uint256 balance);
        function uri(uint256 id) external view returns (string uri);
    }
}
