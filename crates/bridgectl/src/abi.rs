use ethers::contract::abigen;

abigen!(
    BridgeAbi,
    r"[
        function initialize(address admin)
        function isInitialized() view returns (bool)
        function grantRole(bytes32 role, address account)
        function hasRole(bytes32 role, address account) view returns (bool)
        function enableDeposits()
        function disableDeposits()
        function enableWithdrawals()
        function disableWithdrawals()
        function isDepositsEnabled() view returns (bool)
        function isWithdrawalsEnabled() view returns (bool)
        event Initialized(address indexed admin)
        event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender)
        event DepositsEnabled(address indexed enabler)
        event DepositsDisabled(address indexed disabler)
        event WithdrawalsEnabled(address indexed enabler)
        event WithdrawalsDisabled(address indexed disabler)
    ]"
);
